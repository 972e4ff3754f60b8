use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// State of one interactive diagnostic run.
///
/// `provided` and `asked` only ever grow; `possible_diagnoses` only ever
/// shrinks. A "no" answer lands in `asked` but not `provided`, so neither set
/// contains the other in general. Each run gets a fresh instance; nothing
/// here survives across patients.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionState {
    pub id: Uuid,
    pub started_at: jiff::Timestamp,
    /// Symptoms the patient confirmed present.
    pub provided: BTreeSet<String>,
    /// Symptoms already presented, regardless of the answer.
    pub asked: BTreeSet<String>,
    /// Diagnosis keys not yet excluded by pruning.
    pub possible_diagnoses: BTreeSet<String>,
    pub finished: bool,
}

impl SessionState {
    /// Fresh state for a new run: nothing asked, every diagnosis in play.
    pub fn new(possible_diagnoses: BTreeSet<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: jiff::Timestamp::now(),
            provided: BTreeSet::new(),
            asked: BTreeSet::new(),
            possible_diagnoses,
            finished: false,
        }
    }
}
