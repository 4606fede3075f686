//! Medical reference ranges for vital-sign classification
//!
//! Every band boundary used by the classifier lives here as a process-wide
//! constant. The values encode clinical convention (AHA blood-pressure
//! categories, standard adult resting ranges), not tunables — they are
//! deliberately not part of `AppConfig`.

/// Fixed reference ranges for vital-sign classification.
///
/// Band edges are inclusive unless a constant name says otherwise.
pub mod reference_ranges {
    // === Heart Rate (bpm, adult resting) ===
    /// Heart rate at or below this is bradycardia (bpm)
    pub const HEART_RATE_BRADYCARDIA_MAX: f64 = 59.0;
    /// Lower edge of the normal resting band (bpm)
    pub const HEART_RATE_NORMAL_MIN: f64 = 60.0;
    /// Upper edge of the normal resting band (bpm)
    pub const HEART_RATE_NORMAL_MAX: f64 = 100.0;
    /// Heart rate at or above this is tachycardia (bpm)
    pub const HEART_RATE_TACHYCARDIA_MIN: f64 = 101.0;

    // === Blood Pressure (mmHg, AHA categories) ===
    /// Systolic at or above this is a hypertensive crisis (mmHg)
    pub const BP_CRISIS_SYSTOLIC_MIN: f64 = 180.0;
    /// Diastolic at or above this is a hypertensive crisis (mmHg)
    pub const BP_CRISIS_DIASTOLIC_MIN: f64 = 120.0;
    /// Systolic at or above this is stage 2 hypertension (mmHg)
    pub const BP_STAGE2_SYSTOLIC_MIN: f64 = 140.0;
    /// Diastolic at or above this is stage 2 hypertension (mmHg)
    pub const BP_STAGE2_DIASTOLIC_MIN: f64 = 90.0;
    /// Stage 1 systolic band lower edge (mmHg)
    pub const BP_STAGE1_SYSTOLIC_MIN: f64 = 130.0;
    /// Stage 1 systolic band upper edge (mmHg)
    pub const BP_STAGE1_SYSTOLIC_MAX: f64 = 139.0;
    /// Stage 1 diastolic band lower edge (mmHg)
    pub const BP_STAGE1_DIASTOLIC_MIN: f64 = 80.0;
    /// Stage 1 diastolic band upper edge (mmHg)
    pub const BP_STAGE1_DIASTOLIC_MAX: f64 = 89.0;
    /// Elevated systolic band lower edge (mmHg)
    pub const BP_ELEVATED_SYSTOLIC_MIN: f64 = 120.0;
    /// Elevated systolic band upper edge (mmHg)
    pub const BP_ELEVATED_SYSTOLIC_MAX: f64 = 129.0;
    /// Normal systolic upper edge (mmHg)
    pub const BP_NORMAL_SYSTOLIC_MAX: f64 = 119.0;
    /// Normal/elevated diastolic upper edge (mmHg)
    pub const BP_NORMAL_DIASTOLIC_MAX: f64 = 79.0;

    // === Body Temperature (°F) ===
    /// Below this is hypothermia (°F, exclusive)
    pub const TEMP_NORMAL_MIN: f64 = 97.0;
    /// Upper edge of the normal band (°F)
    pub const TEMP_NORMAL_MAX: f64 = 99.5;
    /// Low-grade fever band lower edge (°F)
    pub const TEMP_LOW_GRADE_MIN: f64 = 99.6;
    /// Low-grade fever band upper edge (°F)
    pub const TEMP_LOW_GRADE_MAX: f64 = 102.0;
    /// Moderate fever band lower edge (°F)
    pub const TEMP_MODERATE_MIN: f64 = 102.1;
    /// Moderate fever band upper edge (°F)
    pub const TEMP_MODERATE_MAX: f64 = 104.0;
    /// At or above this is a high fever (°F)
    pub const TEMP_HIGH_MIN: f64 = 104.1;

    // === Oxygen Saturation (SpO2 %) ===
    /// At or above this is the normal range (%)
    pub const SPO2_NORMAL_MIN: f64 = 95.0;
    /// Mild hypoxemia band lower edge (%)
    pub const SPO2_MILD_MIN: f64 = 90.0;
    /// Mild hypoxemia band upper edge (%)
    pub const SPO2_MILD_MAX: f64 = 94.0;
    /// Moderate hypoxemia band lower edge (%)
    pub const SPO2_MODERATE_MIN: f64 = 85.0;
    /// Moderate hypoxemia band upper edge (%)
    pub const SPO2_MODERATE_MAX: f64 = 89.0;
    /// At or below this is severe hypoxemia (%)
    pub const SPO2_SEVERE_MAX: f64 = 84.0;

    // === Respiratory Rate (breaths/min, adult resting) ===
    /// At or below this is bradypnea (breaths/min)
    pub const RESP_BRADYPNEA_MAX: f64 = 11.0;
    /// Lower edge of the normal band (breaths/min)
    pub const RESP_NORMAL_MIN: f64 = 12.0;
    /// Upper edge of the normal band (breaths/min)
    pub const RESP_NORMAL_MAX: f64 = 20.0;
    /// At or above this is tachypnea (breaths/min)
    pub const RESP_TACHYPNEA_MIN: f64 = 21.0;

    // === Body Mass Index (kg/m²) ===
    /// At or below this is underweight
    pub const BMI_UNDERWEIGHT_MAX: f64 = 18.4;
    /// Healthy-weight band lower edge
    pub const BMI_HEALTHY_MIN: f64 = 18.5;
    /// Healthy-weight band upper edge
    pub const BMI_HEALTHY_MAX: f64 = 24.9;
    /// Overweight band lower edge
    pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
    /// Overweight band upper edge
    pub const BMI_OVERWEIGHT_MAX: f64 = 29.9;
    /// At or above this is obese
    pub const BMI_OBESE_MIN: f64 = 30.0;
}

/// Unit conversion factors shared by the classifier and the BMI tooling.
pub mod conversion {
    /// Feet to meters
    pub const FT_TO_M: f64 = 0.3048;
    /// Inches to meters
    pub const IN_TO_M: f64 = 0.0254;
    /// Pounds to kilograms
    pub const LBS_TO_KG: f64 = 0.453_592;
}
