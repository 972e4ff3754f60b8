use std::collections::BTreeSet;

use dorsia_engine::error::EngineError;
use dorsia_engine::{KnowledgeBase, session};

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn fresh_session_has_everything_in_play() {
    let kb = KnowledgeBase::lower_back_pain();
    let state = session::start_session(&kb);

    assert!(state.provided.is_empty());
    assert!(state.asked.is_empty());
    assert_eq!(state.possible_diagnoses, kb.keys());
    assert!(!state.finished);
}

#[test]
fn yes_answer_lands_in_both_sets() {
    let kb = KnowledgeBase::lower_back_pain();
    let mut state = session::start_session(&kb);

    session::apply_answer(&mut state, &kb, "numbness", true).unwrap();
    assert!(state.asked.contains("numbness"));
    assert!(state.provided.contains("numbness"));
}

#[test]
fn no_answer_lands_in_asked_only() {
    let kb = KnowledgeBase::lower_back_pain();
    let mut state = session::start_session(&kb);

    session::apply_answer(&mut state, &kb, "numbness", false).unwrap();
    assert!(state.asked.contains("numbness"));
    assert!(!state.provided.contains("numbness"));
}

#[test]
fn unknown_symptom_is_rejected_without_mutation() {
    let kb = KnowledgeBase::lower_back_pain();
    let mut state = session::start_session(&kb);

    let err = session::apply_answer(&mut state, &kb, "ear_pain", true).unwrap_err();
    assert!(matches!(err, EngineError::UnknownSymptom(s) if s == "ear_pain"));
    assert!(state.asked.is_empty());
    assert!(state.provided.is_empty());
    assert_eq!(state.possible_diagnoses, kb.keys());
}

#[test]
fn denying_required_symptoms_prunes_the_diagnosis() {
    let kb = KnowledgeBase::lower_back_pain();
    let mut state = session::start_session(&kb);

    // Muscular strain has a single required symptom.
    session::apply_answer(&mut state, &kb, "localized_back_pain", false).unwrap();
    assert!(!state.possible_diagnoses.contains("muscular_strain"));
    assert!(state.possible_diagnoses.contains("disc_herniation"));
    assert!(state.possible_diagnoses.contains("sciatica"));
}

#[test]
fn exhausting_questions_finishes_the_session() {
    let kb = KnowledgeBase::lower_back_pain();
    let mut state = session::start_session(&kb);

    for symptom in kb.all_symptoms().clone() {
        session::apply_answer(&mut state, &kb, &symptom, true).unwrap();
    }

    assert_eq!(session::next_question(&mut state, &kb), None);
    assert!(state.finished);
}

#[test]
fn interactive_run_terminates_within_the_universe_bound() {
    let kb = KnowledgeBase::lower_back_pain();
    let bound = kb.all_symptoms().len();

    // All-no and all-yes are the two extreme answer sequences.
    for answer in [false, true] {
        let mut state = session::start_session(&kb);
        let mut rounds = 0;

        while let Some(question) = session::next_question(&mut state, &kb) {
            session::apply_answer(&mut state, &kb, &question.id, answer).unwrap();
            rounds += 1;
            assert!(rounds <= bound, "no termination after {rounds} rounds");
        }

        assert!(state.finished);
        let report = session::finalize(&state, &kb).unwrap();
        assert!(!report.diagnosis_name.is_empty());
    }
}

#[test]
fn interactive_run_converges_on_sciatica() {
    let kb = KnowledgeBase::lower_back_pain();
    let sciatica = kb.lookup("sciatica").unwrap().clone();
    let mut state = session::start_session(&kb);

    // Simulate a patient with exactly the sciatica presentation.
    while let Some(question) = session::next_question(&mut state, &kb) {
        let present = sciatica.required_symptoms.contains(&question.id)
            || sciatica.optional_symptoms.contains(&question.id);
        session::apply_answer(&mut state, &kb, &question.id, present).unwrap();
    }

    let report = session::finalize(&state, &kb).unwrap();
    assert_eq!(report.diagnosis_key, "sciatica");
    assert_eq!(
        report.red_flags_detected,
        set(&["urinary_incontinence", "bowel_incontinence"])
    );
}

#[test]
fn emptied_hypothesis_space_falls_back_to_the_full_catalog() {
    let kb = KnowledgeBase::lower_back_pain();
    let mut state = session::start_session(&kb);

    // These two denials prune every diagnosis.
    session::apply_answer(&mut state, &kb, "localized_back_pain", false).unwrap();
    session::apply_answer(&mut state, &kb, "radiating_leg_pain", false).unwrap();
    assert!(state.possible_diagnoses.is_empty());

    // Finalization still produces a diagnosis: with nothing provided, every
    // entry scores zero and the tie goes to the first key.
    let report = session::finalize(&state, &kb).unwrap();
    assert_eq!(report.diagnosis_key, "disc_herniation");
    assert_eq!(report.score, 0);
}

#[test]
fn batch_scenario_muscular_strain() {
    let kb = KnowledgeBase::lower_back_pain();
    let report = session::diagnose_batch(&kb, &set(&["localized_back_pain"])).unwrap();

    assert_eq!(report.diagnosis_name, "Muscular Strain");
    assert_eq!(report.score, 2);
    assert!(report.red_flags_detected.is_empty());
    assert!(!report.is_urgent());
}

#[test]
fn batch_scenario_sciatica_with_red_flag() {
    let kb = KnowledgeBase::lower_back_pain();
    let provided = set(&[
        "radiating_leg_pain",
        "pain_shoots_when_cough_or_sneeze",
        "numbness",
        "tingling",
        "urinary_incontinence",
    ]);

    let report = session::diagnose_batch(&kb, &provided).unwrap();
    assert_eq!(report.diagnosis_name, "Sciatica / Radiculopathy");
    assert_eq!(report.score, 9);
    assert_eq!(report.red_flags_detected, set(&["urinary_incontinence"]));
    assert!(report.is_urgent());
    assert!(report.suggested_tests.contains("MRI"));
}

#[test]
fn batch_rejects_unknown_symptoms() {
    let kb = KnowledgeBase::lower_back_pain();
    let err = session::diagnose_batch(&kb, &set(&["numbness", "ear_pain"])).unwrap_err();
    assert!(matches!(err, EngineError::UnknownSymptom(s) if s == "ear_pain"));
}

#[test]
fn empty_knowledge_base_reports_no_candidates() {
    let kb = KnowledgeBase::from_entries([]);
    let err = session::diagnose_batch(&kb, &BTreeSet::new()).unwrap_err();
    assert!(matches!(err, EngineError::NoCandidates));
}

#[test]
fn sessions_are_independent() {
    let kb = KnowledgeBase::lower_back_pain();
    let mut first = session::start_session(&kb);
    session::apply_answer(&mut first, &kb, "localized_back_pain", false).unwrap();

    let second = session::start_session(&kb);
    assert_ne!(first.id, second.id);
    assert!(second.asked.is_empty());
    assert_eq!(second.possible_diagnoses, kb.keys());
}
