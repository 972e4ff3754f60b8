use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A symptom identifier paired with its human-readable question label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    pub id: String,
    pub label: String,
}
