//! Candidate pruning for interactive sessions.

use std::collections::BTreeSet;

use crate::KnowledgeBase;

/// Drop every diagnosis with a denied required symptom.
///
/// A diagnosis is excluded iff some symptom in its `required_symptoms` was
/// asked and not confirmed. Denying an optional symptom never excludes
/// anything. The result is always a subset of `possible`, and re-running with
/// unchanged `asked`/`provided` is a no-op. Keys missing from the knowledge
/// base cannot stay plausible and are dropped.
pub fn prune(
    possible: &BTreeSet<String>,
    asked: &BTreeSet<String>,
    provided: &BTreeSet<String>,
    kb: &KnowledgeBase,
) -> BTreeSet<String> {
    possible
        .iter()
        .filter(|key| {
            kb.lookup(key.as_str()).is_ok_and(|diagnosis| {
                !diagnosis
                    .required_symptoms
                    .iter()
                    .any(|s| asked.contains(s) && !provided.contains(s))
            })
        })
        .cloned()
        .collect()
}
