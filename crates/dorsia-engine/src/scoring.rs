//! Symptom-match scoring.
//!
//! The score of a symptom set against a diagnosis is a fixed linear policy:
//! required-symptom matches count double, optional matches count single.
//! Required symptoms are not hard constraints: a diagnosis with zero required
//! matches can still win on optional overlap, which is the catalog's intended
//! (if soft) selection behavior and must not be tightened.

use std::collections::BTreeSet;

use dorsia_core::models::diagnosis::Diagnosis;

use crate::KnowledgeBase;
use crate::error::EngineError;

/// `2 * |required ∩ provided| + |optional ∩ provided|`.
pub fn score(diagnosis: &Diagnosis, provided: &BTreeSet<String>) -> u32 {
    let required = diagnosis.required_symptoms.intersection(provided).count() as u32;
    let optional = diagnosis.optional_symptoms.intersection(provided).count() as u32;
    2 * required + optional
}

/// Score every candidate key and return the best one with its score.
///
/// Candidates are visited in lexicographic key order and only a strictly
/// greater score displaces the current best, so ties resolve to the smallest
/// key. Fails with [`EngineError::NoCandidates`] when given nothing to score
/// and with [`EngineError::UnknownDiagnosis`] for keys outside the knowledge
/// base.
pub fn select_best(
    kb: &KnowledgeBase,
    candidates: &BTreeSet<String>,
    provided: &BTreeSet<String>,
) -> Result<(String, u32), EngineError> {
    let mut best: Option<(&String, u32)> = None;
    for key in candidates {
        let diagnosis = kb.lookup(key)?;
        let candidate_score = score(diagnosis, provided);
        match best {
            Some((_, best_score)) if candidate_score <= best_score => {}
            _ => best = Some((key, candidate_score)),
        }
    }
    best.map(|(key, score)| (key.clone(), score))
        .ok_or(EngineError::NoCandidates)
}
