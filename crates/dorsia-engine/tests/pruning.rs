use std::collections::BTreeSet;

use dorsia_engine::{KnowledgeBase, pruning};

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn denied_required_symptom_excludes_diagnosis() {
    let kb = KnowledgeBase::lower_back_pain();
    let asked = set(&["localized_back_pain"]);
    let provided = BTreeSet::new();

    let possible = pruning::prune(&kb.keys(), &asked, &provided, &kb);
    assert!(!possible.contains("muscular_strain"));
    assert!(possible.contains("disc_herniation"));
    assert!(possible.contains("sciatica"));
}

#[test]
fn denied_optional_symptom_excludes_nothing() {
    let kb = KnowledgeBase::lower_back_pain();
    // morning_stiffness is optional for muscular strain.
    let asked = set(&["morning_stiffness"]);
    let provided = BTreeSet::new();

    let possible = pruning::prune(&kb.keys(), &asked, &provided, &kb);
    assert_eq!(possible, kb.keys());
}

#[test]
fn confirmed_required_symptom_keeps_diagnosis() {
    let kb = KnowledgeBase::lower_back_pain();
    let asked = set(&["localized_back_pain"]);
    let provided = set(&["localized_back_pain"]);

    let possible = pruning::prune(&kb.keys(), &asked, &provided, &kb);
    assert!(possible.contains("muscular_strain"));
}

#[test]
fn prune_result_is_subset_of_input() {
    let kb = KnowledgeBase::lower_back_pain();
    let asked = set(&["radiating_leg_pain", "numbness", "foot_pain"]);
    let provided = set(&["foot_pain"]);

    let before = kb.keys();
    let after = pruning::prune(&before, &asked, &provided, &kb);
    assert!(after.is_subset(&before));
}

#[test]
fn prune_is_idempotent() {
    let kb = KnowledgeBase::lower_back_pain();
    let asked = set(&["radiating_leg_pain", "localized_back_pain"]);
    let provided = set(&["localized_back_pain"]);

    let once = pruning::prune(&kb.keys(), &asked, &provided, &kb);
    let twice = pruning::prune(&once, &asked, &provided, &kb);
    assert_eq!(once, twice);
}

#[test]
fn unknown_keys_are_dropped() {
    let kb = KnowledgeBase::lower_back_pain();
    let possible = set(&["muscular_strain", "lumbago"]);

    let pruned = pruning::prune(&possible, &BTreeSet::new(), &BTreeSet::new(), &kb);
    assert_eq!(pruned, set(&["muscular_strain"]));
}

#[test]
fn denying_every_required_symptom_empties_the_space() {
    let kb = KnowledgeBase::lower_back_pain();
    // localized_back_pain kills muscular strain; radiating_leg_pain is
    // required by both disc herniation and sciatica.
    let asked = set(&["localized_back_pain", "radiating_leg_pain"]);
    let provided = BTreeSet::new();

    let possible = pruning::prune(&kb.keys(), &asked, &provided, &kb);
    assert!(possible.is_empty());
}
