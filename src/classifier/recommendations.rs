//! Static advisory text per vital type and status
//!
//! Threshold categorization is advisory, not diagnostic — the texts say as
//! much and always defer to a healthcare provider.

use crate::types::{VitalStatus, VitalType};

/// Fallback shown for any pairing without a specific entry.
pub const GENERIC_ADVICE: &str =
    "Consult with a healthcare provider for proper evaluation.";

/// Advisory text for a classified reading.
pub fn recommendation(vital_type: VitalType, status: VitalStatus) -> &'static str {
    use VitalStatus as S;
    use VitalType as T;

    match (vital_type, status) {
        (T::HeartRate, S::Bradycardia) => {
            "Consult with a healthcare provider. May be normal for athletes or could indicate underlying conditions."
        }
        (T::HeartRate, S::Normal) => {
            "Maintain regular physical activity and healthy lifestyle."
        }
        (T::HeartRate, S::Tachycardia) => {
            "Consider factors like stress, caffeine, or physical activity. Consult healthcare provider if persistent."
        }

        (T::BloodPressure, S::Normal) => {
            "Maintain healthy diet, regular exercise, and stress management."
        }
        (T::BloodPressure, S::Elevated) => {
            "Lifestyle modifications recommended: reduce sodium, increase exercise, manage stress."
        }
        (T::BloodPressure, S::Stage1Hypertension) => {
            "Consult healthcare provider. Lifestyle changes and possible medication may be needed."
        }
        (T::BloodPressure, S::Stage2Hypertension) => {
            "Seek medical attention. Medication and lifestyle changes typically required."
        }
        (T::BloodPressure, S::HypertensiveCrisis) => "Seek immediate medical attention.",

        (T::Temperature, S::Normal) => "Temperature is within normal range.",
        (T::Temperature, S::LowGradeFever) => {
            "Monitor symptoms, stay hydrated, rest. Consult healthcare provider if persistent."
        }
        (T::Temperature, S::ModerateFever) => {
            "Seek medical attention, especially if accompanied by other symptoms."
        }
        (T::Temperature, S::HighFever) => "Seek immediate medical attention.",
        (T::Temperature, S::Hypothermia) => "Seek immediate medical attention.",

        (T::OxygenSaturation, S::NormalRange) => "Oxygen levels are adequate.",
        (T::OxygenSaturation, S::MildHypoxemia) => {
            "Monitor closely, consult healthcare provider."
        }
        (T::OxygenSaturation, S::ModerateHypoxemia) => "Seek medical attention.",
        (T::OxygenSaturation, S::SevereHypoxemia) => "Seek immediate medical attention.",

        (T::RespiratoryRate, S::Normal) => "Respiratory rate is within normal range.",
        (T::RespiratoryRate, S::Bradypnea) => {
            "Monitor for other symptoms, consult healthcare provider if concerned."
        }
        (T::RespiratoryRate, S::Tachypnea) => {
            "May indicate stress, fever, or respiratory issues. Consult healthcare provider if persistent."
        }

        (T::Bmi, S::Underweight) => {
            "Consider consulting with a healthcare provider about healthy weight gain strategies."
        }
        (T::Bmi, S::HealthyWeight) => {
            "Maintain your current healthy lifestyle with balanced diet and regular exercise."
        }
        (T::Bmi, S::Overweight) => {
            "Consider lifestyle changes including diet modification and increased physical activity."
        }
        (T::Bmi, S::Obese) => {
            "Consult with a healthcare provider for a comprehensive weight management plan."
        }

        _ => GENERIC_ADVICE,
    }
}
