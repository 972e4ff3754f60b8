use std::collections::BTreeSet;

use dorsia_core::models::diagnosis::Diagnosis;

use super::set;

/// Muscular strain: localized mechanical pain, conservative management,
/// no red flags.
pub(crate) fn entry() -> (String, Diagnosis) {
    (
        "muscular_strain".to_string(),
        Diagnosis {
            name: "Muscular Strain".to_string(),
            required_symptoms: set(&["localized_back_pain"]),
            optional_symptoms: set(&[
                "pain_on_movement",
                "muscle_tightness",
                "pain_relieved_by_rest",
                "morning_stiffness",
            ]),
            red_flags: BTreeSet::new(),
            suggested_tests: set(&["Physical Examination"]),
            suggested_treatments: set(&["Rest", "Physiotherapy", "NSAIDs"]),
        },
    )
}
