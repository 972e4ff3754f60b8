use dorsia_core::models::diagnosis::Diagnosis;

use super::set;

/// Sciatica / radiculopathy: radiating pain with sensory changes. Bladder or
/// bowel incontinence here signals possible cauda equina and is red-flagged.
pub(crate) fn entry() -> (String, Diagnosis) {
    (
        "sciatica".to_string(),
        Diagnosis {
            name: "Sciatica / Radiculopathy".to_string(),
            required_symptoms: set(&[
                "radiating_leg_pain",
                "pain_shoots_when_cough_or_sneeze",
                "numbness",
                "tingling",
            ]),
            optional_symptoms: set(&[
                "leg_weakness",
                "urinary_incontinence",
                "bowel_incontinence",
                "pain_on_straight_leg_raise",
                "pain_below_knee",
            ]),
            red_flags: set(&["urinary_incontinence", "bowel_incontinence"]),
            suggested_tests: set(&["MRI", "X-Ray", "Nerve Conduction Study"]),
            suggested_treatments: set(&[
                "NSAIDs",
                "Physical Therapy",
                "Epidural Steroid Injection",
                "Surgery if severe",
            ]),
        },
    )
}
