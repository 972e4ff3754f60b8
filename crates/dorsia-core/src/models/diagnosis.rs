use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One candidate diagnosis in the knowledge base.
///
/// `required_symptoms` are the defining presentation and score double weight;
/// `optional_symptoms` are supportive only. `red_flags` mark symptoms that
/// warrant urgent escalation when the patient reports them. The authoring
/// contract is `red_flags ⊆ required_symptoms ∪ optional_symptoms`, but it is
/// not checked at construction and one catalog entry predates it.
///
/// `suggested_tests` and `suggested_treatments` are descriptive output and
/// never participate in scoring.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Diagnosis {
    pub name: String,
    pub required_symptoms: BTreeSet<String>,
    pub optional_symptoms: BTreeSet<String>,
    pub red_flags: BTreeSet<String>,
    pub suggested_tests: BTreeSet<String>,
    pub suggested_treatments: BTreeSet<String>,
}
