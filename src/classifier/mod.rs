//! Vital-sign classification engine
//!
//! Pure threshold-band classification of raw physiological measurements
//! into clinical status categories, plus BMI and ideal-weight calculation.
//! Every operation here is total: no I/O, no shared state, and no panics —
//! inputs that match no band fall through to [`VitalStatus::Unknown`].
//!
//! Band boundaries live in [`crate::types::reference_ranges`]; they encode
//! clinical convention (exact inclusive/exclusive edges matter) and must
//! not be tuned per deployment.

mod recommendations;
pub mod units;

pub use recommendations::recommendation;
pub use units::convert_temperature;

use serde::Serialize;

use crate::types::reference_ranges as ranges;
use crate::types::{ReadingValue, VitalStatus, VitalType};

/// Classify a heart rate in beats per minute.
///
/// Bands: Bradycardia ≤59, Normal 60–100, Tachycardia ≥101.
pub fn classify_heart_rate(bpm: f64) -> VitalStatus {
    if bpm <= ranges::HEART_RATE_BRADYCARDIA_MAX {
        VitalStatus::Bradycardia
    } else if bpm >= ranges::HEART_RATE_NORMAL_MIN && bpm <= ranges::HEART_RATE_NORMAL_MAX {
        VitalStatus::Normal
    } else if bpm >= ranges::HEART_RATE_TACHYCARDIA_MIN {
        VitalStatus::Tachycardia
    } else {
        VitalStatus::Unknown
    }
}

/// Classify a blood-pressure pair in mmHg.
///
/// Evaluated as a strict priority cascade — blood-pressure risk is driven
/// by whichever of the two numbers is worse, so the metrics cannot be
/// classified independently and merged. First match wins:
///
/// 1. Hypertensive Crisis: systolic ≥180 or diastolic ≥120
/// 2. Stage 2 Hypertension: systolic ≥140 or diastolic ≥90
/// 3. Stage 1 Hypertension: systolic 130–139 or diastolic 80–89
/// 4. Elevated: systolic 120–129 and diastolic ≤79
/// 5. Normal: systolic ≤119 and diastolic ≤79
pub fn classify_blood_pressure(systolic: f64, diastolic: f64) -> VitalStatus {
    if systolic >= ranges::BP_CRISIS_SYSTOLIC_MIN || diastolic >= ranges::BP_CRISIS_DIASTOLIC_MIN {
        return VitalStatus::HypertensiveCrisis;
    }

    if systolic >= ranges::BP_STAGE2_SYSTOLIC_MIN || diastolic >= ranges::BP_STAGE2_DIASTOLIC_MIN {
        return VitalStatus::Stage2Hypertension;
    }

    if (systolic >= ranges::BP_STAGE1_SYSTOLIC_MIN && systolic <= ranges::BP_STAGE1_SYSTOLIC_MAX)
        || (diastolic >= ranges::BP_STAGE1_DIASTOLIC_MIN
            && diastolic <= ranges::BP_STAGE1_DIASTOLIC_MAX)
    {
        return VitalStatus::Stage1Hypertension;
    }

    if systolic >= ranges::BP_ELEVATED_SYSTOLIC_MIN
        && systolic <= ranges::BP_ELEVATED_SYSTOLIC_MAX
        && diastolic <= ranges::BP_NORMAL_DIASTOLIC_MAX
    {
        return VitalStatus::Elevated;
    }

    if systolic <= ranges::BP_NORMAL_SYSTOLIC_MAX && diastolic <= ranges::BP_NORMAL_DIASTOLIC_MAX {
        return VitalStatus::Normal;
    }

    VitalStatus::Unknown
}

/// Classify a body temperature in degrees Fahrenheit.
///
/// Callers holding Celsius convert first via [`convert_temperature`].
/// Bands: Hypothermia <97.0, Normal 97.0–99.5, Low Grade Fever 99.6–102.0,
/// Moderate Fever 102.1–104.0, High Fever ≥104.1.
pub fn classify_temperature(deg_f: f64) -> VitalStatus {
    if deg_f < ranges::TEMP_NORMAL_MIN {
        VitalStatus::Hypothermia
    } else if deg_f <= ranges::TEMP_NORMAL_MAX {
        VitalStatus::Normal
    } else if deg_f >= ranges::TEMP_LOW_GRADE_MIN && deg_f <= ranges::TEMP_LOW_GRADE_MAX {
        VitalStatus::LowGradeFever
    } else if deg_f >= ranges::TEMP_MODERATE_MIN && deg_f <= ranges::TEMP_MODERATE_MAX {
        VitalStatus::ModerateFever
    } else if deg_f >= ranges::TEMP_HIGH_MIN {
        VitalStatus::HighFever
    } else {
        // Between band edges, e.g. 99.55 — narrower than measurement
        // precision but still a defined fallback.
        VitalStatus::Unknown
    }
}

/// Classify an oxygen saturation percentage.
///
/// Evaluated high-to-low because the normal band has an open upper bound.
/// Bands: Normal Range ≥95, Mild 90–94, Moderate 85–89, Severe ≤84.
pub fn classify_oxygen_saturation(percent: f64) -> VitalStatus {
    if percent >= ranges::SPO2_NORMAL_MIN {
        VitalStatus::NormalRange
    } else if percent >= ranges::SPO2_MILD_MIN && percent <= ranges::SPO2_MILD_MAX {
        VitalStatus::MildHypoxemia
    } else if percent >= ranges::SPO2_MODERATE_MIN && percent <= ranges::SPO2_MODERATE_MAX {
        VitalStatus::ModerateHypoxemia
    } else if percent <= ranges::SPO2_SEVERE_MAX {
        VitalStatus::SevereHypoxemia
    } else {
        VitalStatus::Unknown
    }
}

/// Classify a respiratory rate in breaths per minute.
///
/// Bands: Bradypnea ≤11, Normal 12–20, Tachypnea ≥21.
pub fn classify_respiratory_rate(breaths_per_min: f64) -> VitalStatus {
    if breaths_per_min <= ranges::RESP_BRADYPNEA_MAX {
        VitalStatus::Bradypnea
    } else if breaths_per_min >= ranges::RESP_NORMAL_MIN
        && breaths_per_min <= ranges::RESP_NORMAL_MAX
    {
        VitalStatus::Normal
    } else if breaths_per_min >= ranges::RESP_TACHYPNEA_MIN {
        VitalStatus::Tachypnea
    } else {
        VitalStatus::Unknown
    }
}

/// Compute body mass index from height and weight in any supported units.
///
/// Height units: `cm` (default), `ft`, `in`. Weight units: `kg` (default),
/// `lbs`. The result is unrounded — display rounding is the caller's job.
pub fn calculate_bmi(height: f64, weight: f64, height_unit: &str, weight_unit: &str) -> f64 {
    let height_m = units::height_to_meters(height, height_unit);
    let weight_kg = units::weight_to_kg(weight, weight_unit);
    weight_kg / (height_m * height_m)
}

/// Classify a BMI value.
///
/// Bands: Underweight ≤18.4, Healthy Weight 18.5–24.9,
/// Overweight 25.0–29.9, Obese ≥30.0.
pub fn classify_bmi(bmi: f64) -> VitalStatus {
    if bmi <= ranges::BMI_UNDERWEIGHT_MAX {
        VitalStatus::Underweight
    } else if bmi >= ranges::BMI_HEALTHY_MIN && bmi <= ranges::BMI_HEALTHY_MAX {
        VitalStatus::HealthyWeight
    } else if bmi >= ranges::BMI_OVERWEIGHT_MIN && bmi <= ranges::BMI_OVERWEIGHT_MAX {
        VitalStatus::Overweight
    } else if bmi >= ranges::BMI_OBESE_MIN {
        VitalStatus::Obese
    } else {
        VitalStatus::Unknown
    }
}

/// Weight interval yielding a healthy BMI, always reported in kg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdealWeightRange {
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

/// The weight range producing a BMI in the healthy band for a height.
///
/// Bounds are rounded to one decimal.
pub fn ideal_weight_range(height: f64, height_unit: &str) -> IdealWeightRange {
    let height_m = units::height_to_meters(height, height_unit);
    let squared = height_m * height_m;
    IdealWeightRange {
        min: round1(ranges::BMI_HEALTHY_MIN * squared),
        max: round1(ranges::BMI_HEALTHY_MAX * squared),
        unit: "kg",
    }
}

/// Classify a reading value for its vital type.
///
/// The reading's display unit is the only unit context that matters:
/// temperatures recorded in Celsius are converted to Fahrenheit before the
/// band lookup. A payload whose shape does not match the type (a scalar for
/// Blood Pressure, a pair for anything else) yields `Unknown`.
pub fn classify(vital_type: VitalType, value: &ReadingValue, unit: &str) -> VitalStatus {
    match (vital_type, value) {
        (VitalType::HeartRate, ReadingValue::Scalar(v)) => classify_heart_rate(*v),
        (VitalType::BloodPressure, ReadingValue::Pressure(p)) => {
            classify_blood_pressure(p.systolic, p.diastolic)
        }
        (VitalType::Temperature, ReadingValue::Scalar(v)) => {
            let deg_f = if units::is_celsius_unit(unit) {
                convert_temperature(*v, "C", "F")
            } else {
                *v
            };
            classify_temperature(deg_f)
        }
        (VitalType::Bmi, ReadingValue::Scalar(v)) => classify_bmi(*v),
        (VitalType::OxygenSaturation, ReadingValue::Scalar(v)) => classify_oxygen_saturation(*v),
        (VitalType::RespiratoryRate, ReadingValue::Scalar(v)) => classify_respiratory_rate(*v),
        _ => VitalStatus::Unknown,
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PressureValue;

    #[test]
    fn test_heart_rate_exact_edges() {
        assert_eq!(classify_heart_rate(59.0), VitalStatus::Bradycardia);
        assert_eq!(classify_heart_rate(60.0), VitalStatus::Normal);
        assert_eq!(classify_heart_rate(100.0), VitalStatus::Normal);
        assert_eq!(classify_heart_rate(101.0), VitalStatus::Tachycardia);
    }

    #[test]
    fn test_heart_rate_extremes() {
        assert_eq!(classify_heart_rate(30.0), VitalStatus::Bradycardia);
        assert_eq!(classify_heart_rate(72.0), VitalStatus::Normal);
        assert_eq!(classify_heart_rate(185.0), VitalStatus::Tachycardia);
    }

    #[test]
    fn test_blood_pressure_normal_and_elevated() {
        assert_eq!(classify_blood_pressure(110.0, 70.0), VitalStatus::Normal);
        assert_eq!(classify_blood_pressure(119.0, 79.0), VitalStatus::Normal);
        assert_eq!(classify_blood_pressure(120.0, 79.0), VitalStatus::Elevated);
        assert_eq!(classify_blood_pressure(129.0, 75.0), VitalStatus::Elevated);
    }

    #[test]
    fn test_blood_pressure_stages() {
        assert_eq!(
            classify_blood_pressure(130.0, 70.0),
            VitalStatus::Stage1Hypertension
        );
        assert_eq!(
            classify_blood_pressure(125.0, 85.0),
            VitalStatus::Stage1Hypertension
        );
        assert_eq!(
            classify_blood_pressure(140.0, 85.0),
            VitalStatus::Stage2Hypertension
        );
        assert_eq!(
            classify_blood_pressure(135.0, 90.0),
            VitalStatus::Stage2Hypertension
        );
    }

    /// Priority law: the highest-severity matching band wins. Systolic 135
    /// is in the stage-1 band, but diastolic 95 triggers stage 2.
    #[test]
    fn test_blood_pressure_priority_cascade() {
        assert_eq!(
            classify_blood_pressure(135.0, 95.0),
            VitalStatus::Stage2Hypertension
        );
    }

    #[test]
    fn test_blood_pressure_crisis_dominates() {
        assert_eq!(
            classify_blood_pressure(180.0, 70.0),
            VitalStatus::HypertensiveCrisis
        );
        assert_eq!(
            classify_blood_pressure(120.0, 120.0),
            VitalStatus::HypertensiveCrisis
        );
        assert_eq!(
            classify_blood_pressure(200.0, 130.0),
            VitalStatus::HypertensiveCrisis
        );
    }

    #[test]
    fn test_temperature_bands() {
        assert_eq!(classify_temperature(95.0), VitalStatus::Hypothermia);
        assert_eq!(classify_temperature(96.9), VitalStatus::Hypothermia);
        assert_eq!(classify_temperature(97.0), VitalStatus::Normal);
        assert_eq!(classify_temperature(99.5), VitalStatus::Normal);
        assert_eq!(classify_temperature(99.6), VitalStatus::LowGradeFever);
        assert_eq!(classify_temperature(102.0), VitalStatus::LowGradeFever);
        assert_eq!(classify_temperature(102.1), VitalStatus::ModerateFever);
        assert_eq!(classify_temperature(104.0), VitalStatus::ModerateFever);
        assert_eq!(classify_temperature(104.1), VitalStatus::HighFever);
        assert_eq!(classify_temperature(106.0), VitalStatus::HighFever);
    }

    #[test]
    fn test_oxygen_saturation_bands() {
        assert_eq!(classify_oxygen_saturation(100.0), VitalStatus::NormalRange);
        assert_eq!(classify_oxygen_saturation(95.0), VitalStatus::NormalRange);
        assert_eq!(classify_oxygen_saturation(94.0), VitalStatus::MildHypoxemia);
        assert_eq!(classify_oxygen_saturation(90.0), VitalStatus::MildHypoxemia);
        assert_eq!(
            classify_oxygen_saturation(89.0),
            VitalStatus::ModerateHypoxemia
        );
        assert_eq!(
            classify_oxygen_saturation(85.0),
            VitalStatus::ModerateHypoxemia
        );
        assert_eq!(
            classify_oxygen_saturation(84.0),
            VitalStatus::SevereHypoxemia
        );
        assert_eq!(
            classify_oxygen_saturation(70.0),
            VitalStatus::SevereHypoxemia
        );
    }

    #[test]
    fn test_respiratory_rate_bands() {
        assert_eq!(classify_respiratory_rate(11.0), VitalStatus::Bradypnea);
        assert_eq!(classify_respiratory_rate(12.0), VitalStatus::Normal);
        assert_eq!(classify_respiratory_rate(20.0), VitalStatus::Normal);
        assert_eq!(classify_respiratory_rate(21.0), VitalStatus::Tachypnea);
    }

    #[test]
    fn test_bmi_calculation_and_classification() {
        let bmi = calculate_bmi(180.0, 80.0, "cm", "kg");
        assert!((bmi - 24.691_358_024_691_36).abs() < 1e-9);
        assert_eq!(classify_bmi(bmi), VitalStatus::HealthyWeight);
    }

    #[test]
    fn test_bmi_imperial_units() {
        // 5'11" (71 in), 176.37 lbs ≈ 80 kg → same BMI as the metric case
        let bmi = calculate_bmi(71.0, 176.37, "in", "lbs");
        assert!((bmi - 24.6).abs() < 0.2, "bmi = {bmi}");
    }

    #[test]
    fn test_bmi_bands() {
        assert_eq!(classify_bmi(16.0), VitalStatus::Underweight);
        assert_eq!(classify_bmi(18.4), VitalStatus::Underweight);
        assert_eq!(classify_bmi(18.5), VitalStatus::HealthyWeight);
        assert_eq!(classify_bmi(24.9), VitalStatus::HealthyWeight);
        assert_eq!(classify_bmi(25.0), VitalStatus::Overweight);
        assert_eq!(classify_bmi(29.9), VitalStatus::Overweight);
        assert_eq!(classify_bmi(30.0), VitalStatus::Obese);
        assert_eq!(classify_bmi(42.0), VitalStatus::Obese);
    }

    #[test]
    fn test_ideal_weight_range() {
        let range = ideal_weight_range(180.0, "cm");
        // 18.5 * 1.8² = 59.94, 24.9 * 1.8² = 80.676
        assert_eq!(range.min, 59.9);
        assert_eq!(range.max, 80.7);
        assert_eq!(range.unit, "kg");
        assert!(range.min < range.max);
    }

    #[test]
    fn test_dispatcher_routes_by_type() {
        assert_eq!(
            classify(VitalType::HeartRate, &ReadingValue::Scalar(72.0), "bpm"),
            VitalStatus::Normal
        );
        assert_eq!(
            classify(
                VitalType::BloodPressure,
                &ReadingValue::Pressure(PressureValue::new(135.0, 95.0)),
                "mmHg"
            ),
            VitalStatus::Stage2Hypertension
        );
        assert_eq!(
            classify(VitalType::OxygenSaturation, &ReadingValue::Scalar(92.0), "%"),
            VitalStatus::MildHypoxemia
        );
    }

    #[test]
    fn test_dispatcher_converts_celsius_for_status() {
        // 38.0 °C = 100.4 °F → low-grade fever
        assert_eq!(
            classify(VitalType::Temperature, &ReadingValue::Scalar(38.0), "°C"),
            VitalStatus::LowGradeFever
        );
        // Same number read as °F is normal
        assert_eq!(
            classify(VitalType::Temperature, &ReadingValue::Scalar(98.0), "°F"),
            VitalStatus::Normal
        );
    }

    #[test]
    fn test_dispatcher_mismatched_payload_is_unknown() {
        assert_eq!(
            classify(VitalType::BloodPressure, &ReadingValue::Scalar(120.0), "mmHg"),
            VitalStatus::Unknown
        );
        assert_eq!(
            classify(
                VitalType::HeartRate,
                &ReadingValue::Pressure(PressureValue::new(120.0, 80.0)),
                "bpm"
            ),
            VitalStatus::Unknown
        );
    }

    /// Pure function: classifying the same value twice yields the same
    /// status.
    #[test]
    fn test_classification_is_idempotent() {
        for bpm in [45.0, 59.0, 60.0, 72.0, 100.0, 101.0, 160.0] {
            assert_eq!(classify_heart_rate(bpm), classify_heart_rate(bpm));
        }
    }
}
