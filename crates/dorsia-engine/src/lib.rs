//! dorsia-engine
//!
//! Diagnostic inference engine for lower back pain: the diagnosis knowledge
//! base, symptom scoring, candidate pruning, and best-first question
//! selection. Pure synchronous computation over finite sets; the UI layer is
//! a separate collaborator that drives these functions per answer.

pub mod error;
pub mod knowledge;
pub mod pruning;
pub mod scoring;
pub mod selector;
pub mod session;

use std::collections::{BTreeMap, BTreeSet};

use dorsia_core::models::diagnosis::Diagnosis;
use dorsia_core::models::symptom::Symptom;

use crate::error::EngineError;

/// The diagnosis catalog, read-only after construction.
///
/// Entries live in an ordered map, so every iteration (and therefore every
/// documented tie-break) is deterministic in lexicographic key order. The
/// symptom universe is derived once here and cached; the label catalog maps
/// symptom ids to the question text shown to the patient.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: BTreeMap<String, Diagnosis>,
    universe: BTreeSet<String>,
    labels: BTreeMap<String, String>,
}

impl KnowledgeBase {
    /// The built-in lower-back-pain knowledge base.
    pub fn lower_back_pain() -> Self {
        let mut kb = Self::from_entries([
            knowledge::muscular_strain::entry(),
            knowledge::disc_herniation::entry(),
            knowledge::sciatica::entry(),
        ]);
        kb.labels = knowledge::symptom_labels();
        kb
    }

    /// Assemble a knowledge base from explicit entries.
    ///
    /// The symptom universe (union of required and optional symptoms across
    /// all entries) is computed once here. Red flags are deliberately not
    /// part of the universe.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Diagnosis)>) -> Self {
        let entries: BTreeMap<String, Diagnosis> = entries.into_iter().collect();
        let universe = entries
            .values()
            .flat_map(|d| d.required_symptoms.iter().chain(&d.optional_symptoms))
            .cloned()
            .collect();
        Self {
            entries,
            universe,
            labels: BTreeMap::new(),
        }
    }

    /// Look up a diagnosis by key.
    pub fn lookup(&self, key: &str) -> Result<&Diagnosis, EngineError> {
        self.entries
            .get(key)
            .ok_or_else(|| EngineError::UnknownDiagnosis(key.to_string()))
    }

    /// All diagnosis keys, in lexicographic order.
    pub fn keys(&self) -> BTreeSet<String> {
        self.entries.keys().cloned().collect()
    }

    /// Iterate over every entry in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Diagnosis)> {
        self.entries.iter()
    }

    /// The symptom universe: every required or optional symptom of any entry.
    pub fn all_symptoms(&self) -> &BTreeSet<String> {
        &self.universe
    }

    /// Whether a symptom id belongs to the universe.
    pub fn contains_symptom(&self, id: &str) -> bool {
        self.universe.contains(id)
    }

    /// Display label for a symptom id, falling back to the raw id for
    /// anything the catalog does not cover.
    pub fn symptom_label(&self, id: &str) -> String {
        self.labels
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }

    /// The full symptom catalog sorted by display label, for selection UIs.
    pub fn symptoms(&self) -> Vec<Symptom> {
        let mut symptoms: Vec<Symptom> = self
            .universe
            .iter()
            .map(|id| Symptom {
                id: id.clone(),
                label: self.symptom_label(id),
            })
            .collect();
        symptoms.sort_by(|a, b| a.label.cmp(&b.label));
        symptoms
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
