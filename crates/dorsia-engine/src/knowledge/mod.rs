//! Static lower-back-pain knowledge: one module per diagnosis plus the
//! symptom display catalog. All content is compiled into the process; there
//! is no runtime loading.

pub mod disc_herniation;
pub mod muscular_strain;
pub mod sciatica;

use std::collections::{BTreeMap, BTreeSet};

/// Question labels for every symptom id the knowledge base mentions,
/// including red-flag-only ids that never appear in the symptom universe.
const SYMPTOM_LABELS: &[(&str, &str)] = &[
    ("arm_or_shoulder_pain", "Arm or shoulder pain"),
    ("bowel_incontinence", "Loss of bowel control"),
    ("buttock_or_thigh_pain", "Buttock or thigh pain"),
    ("foot_pain", "Foot pain"),
    ("leg_weakness", "Leg weakness"),
    ("localized_back_pain", "Localized back pain"),
    ("morning_stiffness", "Morning stiffness"),
    ("muscle_tightness", "Muscle tightness"),
    ("numbness", "Numbness"),
    ("pain_below_knee", "Pain below the knee"),
    ("pain_on_bending_or_twisting", "Pain when bending or twisting"),
    ("pain_on_movement", "Pain when moving"),
    ("pain_on_straight_leg_raise", "Pain when raising a straightened leg"),
    ("pain_relieved_by_rest", "Pain gets better with rest"),
    ("pain_shoots_when_cough_or_sneeze", "Pain shoots down when coughing or sneezing"),
    ("radiating_leg_pain", "Pain radiating from the back down the leg"),
    ("saddle_numbness", "Numbness between the legs"),
    ("sharp_back_or_leg_pain", "Sharp back or leg pain"),
    ("tingling", "Tingling"),
    ("urinary_incontinence", "Loss of bladder control"),
];

pub(crate) fn symptom_labels() -> BTreeMap<String, String> {
    SYMPTOM_LABELS
        .iter()
        .map(|(id, label)| (id.to_string(), label.to_string()))
        .collect()
}

pub(crate) fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
