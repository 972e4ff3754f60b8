use dorsia_core::models::diagnosis::Diagnosis;

use super::set;

/// Disc herniation: radicular pain aggravated by Valsalva, imaging-confirmed.
///
/// Two of the red flags (urinary_incontinence, saddle_numbness) are not in
/// this entry's own symptom sets; they were authored that way in the source
/// catalog and the subset contract is not enforced.
pub(crate) fn entry() -> (String, Diagnosis) {
    (
        "disc_herniation".to_string(),
        Diagnosis {
            name: "Disc Herniation".to_string(),
            required_symptoms: set(&[
                "radiating_leg_pain",
                "pain_shoots_when_cough_or_sneeze",
                "sharp_back_or_leg_pain",
            ]),
            optional_symptoms: set(&[
                "numbness",
                "tingling",
                "leg_weakness",
                "buttock_or_thigh_pain",
                "foot_pain",
                "pain_on_bending_or_twisting",
                "arm_or_shoulder_pain",
            ]),
            red_flags: set(&["urinary_incontinence", "saddle_numbness", "leg_weakness"]),
            suggested_tests: set(&["MRI", "CT Scan", "Physical Examination"]),
            suggested_treatments: set(&[
                "Physical Therapy",
                "Pain Management",
                "Surgery if severe",
            ]),
        },
    )
}
