use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The outcome of a diagnostic run, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisReport {
    pub diagnosis_key: String,
    pub diagnosis_name: String,
    pub score: u32,
    /// Red-flag symptoms the patient actually reported. Non-empty means the
    /// frontend shows the urgent-attention banner.
    pub red_flags_detected: BTreeSet<String>,
    pub suggested_tests: BTreeSet<String>,
    pub suggested_treatments: BTreeSet<String>,
}

impl DiagnosisReport {
    /// Whether any red-flag symptom was reported.
    pub fn is_urgent(&self) -> bool {
        !self.red_flags_detected.is_empty()
    }
}
