//! Session operations: the engine's boundary with the presentation layer.
//!
//! The driver owns a [`SessionState`] and threads it through these functions
//! one answer at a time. Every call is synchronous and returns before the
//! next user interaction; there is no hidden state anywhere in the engine.

use std::collections::BTreeSet;

use tracing::{debug, info};

use dorsia_core::models::report::DiagnosisReport;
use dorsia_core::models::session::SessionState;
use dorsia_core::models::symptom::Symptom;

use crate::error::EngineError;
use crate::{KnowledgeBase, pruning, scoring, selector};

/// Open a fresh session: nothing asked, every diagnosis still possible.
pub fn start_session(kb: &KnowledgeBase) -> SessionState {
    SessionState::new(kb.keys())
}

/// Record one yes/no answer and re-prune the hypothesis space.
///
/// The symptom lands in `asked` either way and in `provided` only when
/// present. Symptoms outside the universe are rejected before any state
/// mutation, so the session stays valid and the caller can re-prompt.
pub fn apply_answer(
    session: &mut SessionState,
    kb: &KnowledgeBase,
    symptom: &str,
    is_present: bool,
) -> Result<(), EngineError> {
    if !kb.contains_symptom(symptom) {
        return Err(EngineError::UnknownSymptom(symptom.to_string()));
    }

    session.asked.insert(symptom.to_string());
    if is_present {
        session.provided.insert(symptom.to_string());
    }

    let before = session.possible_diagnoses.len();
    session.possible_diagnoses = pruning::prune(
        &session.possible_diagnoses,
        &session.asked,
        &session.provided,
        kb,
    );
    debug!(
        "answered {}={}, candidates {} -> {}",
        symptom,
        is_present,
        before,
        session.possible_diagnoses.len()
    );
    Ok(())
}

/// Select the next question, marking the session finished when none remains.
pub fn next_question(session: &mut SessionState, kb: &KnowledgeBase) -> Option<Symptom> {
    match selector::next_symptom(&session.possible_diagnoses, &session.asked, kb) {
        Some(id) => Some(Symptom {
            label: kb.symptom_label(&id),
            id,
        }),
        None => {
            session.finished = true;
            None
        }
    }
}

/// Score the surviving hypotheses and build the final report.
///
/// An emptied hypothesis space falls back to the full knowledge base, so an
/// interactive run always ends with some diagnosis as long as the knowledge
/// base itself is non-empty.
pub fn finalize(session: &SessionState, kb: &KnowledgeBase) -> Result<DiagnosisReport, EngineError> {
    let candidates = if session.possible_diagnoses.is_empty() {
        debug!("hypothesis space empty, falling back to the full knowledge base");
        kb.keys()
    } else {
        session.possible_diagnoses.clone()
    };
    report(kb, &candidates, &session.provided)
}

/// Batch-mode entry point: score one symptom set against the whole catalog.
///
/// The "at least N symptoms" gate belongs to the caller, not the engine;
/// unknown symptom ids are rejected here.
pub fn diagnose_batch(
    kb: &KnowledgeBase,
    provided: &BTreeSet<String>,
) -> Result<DiagnosisReport, EngineError> {
    for symptom in provided {
        if !kb.contains_symptom(symptom) {
            return Err(EngineError::UnknownSymptom(symptom.clone()));
        }
    }
    report(kb, &kb.keys(), provided)
}

fn report(
    kb: &KnowledgeBase,
    candidates: &BTreeSet<String>,
    provided: &BTreeSet<String>,
) -> Result<DiagnosisReport, EngineError> {
    let (key, score) = scoring::select_best(kb, candidates, provided)?;
    let diagnosis = kb.lookup(&key)?;

    let red_flags_detected: BTreeSet<String> = diagnosis
        .red_flags
        .intersection(provided)
        .cloned()
        .collect();

    info!("final diagnosis {} (score {})", key, score);
    if !red_flags_detected.is_empty() {
        info!("red flags detected: {:?}", red_flags_detected);
    }

    Ok(DiagnosisReport {
        diagnosis_key: key,
        diagnosis_name: diagnosis.name.clone(),
        score,
        red_flags_detected,
        suggested_tests: diagnosis.suggested_tests.clone(),
        suggested_treatments: diagnosis.suggested_treatments.clone(),
    })
}
