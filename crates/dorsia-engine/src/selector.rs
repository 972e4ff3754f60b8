//! Best-first question selection.

use std::collections::BTreeSet;

use crate::KnowledgeBase;

/// Pick the next symptom to ask about, or `None` when no informative
/// question remains.
///
/// Candidates are the unasked symptoms mentioned (required or optional) by
/// any still-possible diagnosis. Each candidate's relevance is the number of
/// possible diagnoses mentioning it; the maximum wins, so the symptoms shared
/// across the remaining hypothesis space are asked first. Candidates are
/// scanned in id order with a strict comparison, so ties resolve to the
/// lexicographically smallest id. A single linear scan; the candidate sets
/// are far too small to justify a priority queue.
pub fn next_symptom(
    possible: &BTreeSet<String>,
    asked: &BTreeSet<String>,
    kb: &KnowledgeBase,
) -> Option<String> {
    let mut candidates: BTreeSet<&String> = BTreeSet::new();
    for key in possible {
        if let Ok(diagnosis) = kb.lookup(key) {
            candidates.extend(diagnosis.required_symptoms.iter());
            candidates.extend(diagnosis.optional_symptoms.iter());
        }
    }

    let mut best: Option<(&String, usize)> = None;
    for symptom in candidates {
        if asked.contains(symptom) {
            continue;
        }
        let relevance = possible
            .iter()
            .filter(|key| {
                kb.lookup(key.as_str()).is_ok_and(|d| {
                    d.required_symptoms.contains(symptom) || d.optional_symptoms.contains(symptom)
                })
            })
            .count();
        match best {
            Some((_, best_relevance)) if relevance <= best_relevance => {}
            _ => best = Some((symptom, relevance)),
        }
    }

    best.map(|(symptom, _)| symptom.clone())
}
