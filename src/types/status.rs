//! Clinical status labels produced by the classifier

use serde::{Deserialize, Serialize};

/// Clinical category assigned to a reading at save time.
///
/// Labels serialize as their display strings (`"Stage 2 Hypertension"`, ...)
/// so exported documents stay readable and import round-trips cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VitalStatus {
    // Heart rate
    Bradycardia,
    Normal,
    Tachycardia,

    // Blood pressure
    Elevated,
    #[serde(rename = "Stage 1 Hypertension")]
    Stage1Hypertension,
    #[serde(rename = "Stage 2 Hypertension")]
    Stage2Hypertension,
    #[serde(rename = "Hypertensive Crisis")]
    HypertensiveCrisis,

    // Temperature
    Hypothermia,
    #[serde(rename = "Low Grade Fever")]
    LowGradeFever,
    #[serde(rename = "Moderate Fever")]
    ModerateFever,
    #[serde(rename = "High Fever")]
    HighFever,

    // Oxygen saturation
    #[serde(rename = "Normal Range")]
    NormalRange,
    #[serde(rename = "Mild Hypoxemia")]
    MildHypoxemia,
    #[serde(rename = "Moderate Hypoxemia")]
    ModerateHypoxemia,
    #[serde(rename = "Severe Hypoxemia")]
    SevereHypoxemia,

    // Respiratory rate
    Bradypnea,
    Tachypnea,

    // BMI
    Underweight,
    #[serde(rename = "Healthy Weight")]
    HealthyWeight,
    Overweight,
    Obese,

    /// Defensive fallback — no band matched. Should not occur with
    /// well-formed thresholds.
    Unknown,
}

impl VitalStatus {
    /// Display label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bradycardia => "Bradycardia",
            Self::Normal => "Normal",
            Self::Tachycardia => "Tachycardia",
            Self::Elevated => "Elevated",
            Self::Stage1Hypertension => "Stage 1 Hypertension",
            Self::Stage2Hypertension => "Stage 2 Hypertension",
            Self::HypertensiveCrisis => "Hypertensive Crisis",
            Self::Hypothermia => "Hypothermia",
            Self::LowGradeFever => "Low Grade Fever",
            Self::ModerateFever => "Moderate Fever",
            Self::HighFever => "High Fever",
            Self::NormalRange => "Normal Range",
            Self::MildHypoxemia => "Mild Hypoxemia",
            Self::ModerateHypoxemia => "Moderate Hypoxemia",
            Self::SevereHypoxemia => "Severe Hypoxemia",
            Self::Bradypnea => "Bradypnea",
            Self::Tachypnea => "Tachypnea",
            Self::Underweight => "Underweight",
            Self::HealthyWeight => "Healthy Weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
            Self::Unknown => "Unknown",
        }
    }

    /// Dashboard severity tier for this status.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Normal | Self::NormalRange | Self::HealthyWeight => Severity::Ok,

            Self::Bradycardia
            | Self::Tachycardia
            | Self::Elevated
            | Self::Stage1Hypertension
            | Self::LowGradeFever
            | Self::MildHypoxemia
            | Self::Bradypnea
            | Self::Tachypnea
            | Self::Underweight
            | Self::Overweight => Severity::Caution,

            Self::Stage2Hypertension
            | Self::HypertensiveCrisis
            | Self::Hypothermia
            | Self::ModerateFever
            | Self::HighFever
            | Self::ModerateHypoxemia
            | Self::SevereHypoxemia
            | Self::Obese => Severity::Alert,

            Self::Unknown => Severity::Caution,
        }
    }
}

impl std::fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Three-tier severity used by the dashboard summary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok = 0,
    Caution = 1,
    Alert = 2,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Ok => write!(f, "OK"),
            Severity::Caution => write!(f, "CAUTION"),
            Severity::Alert => write!(f, "ALERT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_as_display_label() {
        let json = serde_json::to_string(&VitalStatus::Stage2Hypertension).unwrap();
        assert_eq!(json, "\"Stage 2 Hypertension\"");

        let back: VitalStatus = serde_json::from_str("\"Healthy Weight\"").unwrap();
        assert_eq!(back, VitalStatus::HealthyWeight);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Ok < Severity::Caution);
        assert!(Severity::Caution < Severity::Alert);
    }

    #[test]
    fn test_crisis_is_alert() {
        assert_eq!(VitalStatus::HypertensiveCrisis.severity(), Severity::Alert);
        assert_eq!(VitalStatus::Normal.severity(), Severity::Ok);
        assert_eq!(VitalStatus::Elevated.severity(), Severity::Caution);
    }
}
