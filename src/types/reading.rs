//! Reading types: one persisted vital-sign measurement

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::settings::UserSettings;
use super::status::VitalStatus;

/// Fixed set of tracked vital-sign types.
///
/// Serialized as the display tag (`"Heart Rate"`, `"BMI"`, ...) which is
/// also the tag used in exported documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VitalType {
    #[serde(rename = "Heart Rate")]
    HeartRate,
    #[serde(rename = "Blood Pressure")]
    BloodPressure,
    Temperature,
    #[serde(rename = "BMI")]
    Bmi,
    #[serde(rename = "Oxygen Saturation")]
    OxygenSaturation,
    #[serde(rename = "Respiratory Rate")]
    RespiratoryRate,
}

impl VitalType {
    /// All tracked types, in dashboard display order.
    pub const ALL: [VitalType; 6] = [
        VitalType::HeartRate,
        VitalType::BloodPressure,
        VitalType::Temperature,
        VitalType::Bmi,
        VitalType::OxygenSaturation,
        VitalType::RespiratoryRate,
    ];

    /// Display tag, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeartRate => "Heart Rate",
            Self::BloodPressure => "Blood Pressure",
            Self::Temperature => "Temperature",
            Self::Bmi => "BMI",
            Self::OxygenSaturation => "Oxygen Saturation",
            Self::RespiratoryRate => "Respiratory Rate",
        }
    }

    /// Display unit for a new reading when the caller did not supply one.
    ///
    /// Temperature follows the user's configured unit; the rest are fixed.
    pub fn default_unit(&self, settings: &UserSettings) -> String {
        match self {
            Self::HeartRate => "bpm".to_string(),
            Self::BloodPressure => "mmHg".to_string(),
            Self::Temperature => format!("°{}", settings.temperature_unit),
            Self::Bmi => "kg/m²".to_string(),
            Self::OxygenSaturation => "%".to_string(),
            Self::RespiratoryRate => "breaths/min".to_string(),
        }
    }
}

impl std::fmt::Display for VitalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VitalType {
    type Err = UnknownVitalType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Heart Rate" => Ok(Self::HeartRate),
            "Blood Pressure" => Ok(Self::BloodPressure),
            "Temperature" => Ok(Self::Temperature),
            "BMI" => Ok(Self::Bmi),
            "Oxygen Saturation" => Ok(Self::OxygenSaturation),
            "Respiratory Rate" => Ok(Self::RespiratoryRate),
            other => Err(UnknownVitalType(other.to_string())),
        }
    }
}

/// Error for an unrecognized vital-type tag.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown vital-sign type: {0}")]
pub struct UnknownVitalType(pub String);

/// A systolic/diastolic pair, serialized as `"120/80"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureValue {
    pub systolic: f64,
    pub diastolic: f64,
}

impl PressureValue {
    pub fn new(systolic: f64, diastolic: f64) -> Self {
        Self { systolic, diastolic }
    }
}

impl std::fmt::Display for PressureValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

impl std::str::FromStr for PressureValue {
    type Err = MalformedPressure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sys, dia) = s
            .split_once('/')
            .ok_or_else(|| MalformedPressure(s.to_string()))?;
        let systolic: f64 = sys
            .trim()
            .parse()
            .map_err(|_| MalformedPressure(s.to_string()))?;
        let diastolic: f64 = dia
            .trim()
            .parse()
            .map_err(|_| MalformedPressure(s.to_string()))?;
        Ok(Self { systolic, diastolic })
    }
}

/// Error for a blood-pressure value that is not `"systolic/diastolic"`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("malformed blood-pressure value (expected \"systolic/diastolic\"): {0}")]
pub struct MalformedPressure(pub String);

impl Serialize for PressureValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PressureValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Measurement payload of a reading.
///
/// Scalar vitals are plain JSON numbers; blood pressure is the composite
/// `"systolic/diastolic"` string, matching the export document format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadingValue {
    Scalar(f64),
    Pressure(PressureValue),
}

impl ReadingValue {
    /// The single numeric value, when there is one.
    ///
    /// Composite blood-pressure pairs return `None` and are thereby
    /// excluded from series aggregation rather than degrading to NaN.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Pressure(_) => None,
        }
    }
}

impl std::fmt::Display for ReadingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(v) => write!(f, "{v}"),
            Self::Pressure(p) => write!(f, "{p}"),
        }
    }
}

/// One persisted vital-sign measurement.
///
/// `status` is computed exactly once, at save time, by the classifier;
/// reads never recompute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub vital_type: VitalType,
    pub value: ReadingValue,
    pub unit: String,
    pub status: VitalStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Reading {
    /// Build a new reading, classifying the value against the reference
    /// ranges. `timestamp` defaults to now when absent.
    pub fn new(
        vital_type: VitalType,
        value: ReadingValue,
        unit: impl Into<String>,
        timestamp: Option<DateTime<Utc>>,
        notes: Option<String>,
    ) -> Self {
        let unit = unit.into();
        let status = crate::classifier::classify(vital_type, &value, &unit);
        Self {
            id: Uuid::new_v4(),
            vital_type,
            value,
            unit,
            status,
            timestamp: timestamp.unwrap_or_else(Utc::now),
            notes,
        }
    }
}

/// Partial update applied to a stored reading.
///
/// Omitted fields keep their stored values. A changed value triggers
/// re-classification so the status invariant holds after the merge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadingPatch {
    pub value: Option<ReadingValue>,
    pub unit: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl ReadingPatch {
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
            && self.unit.is_none()
            && self.timestamp.is_none()
            && self.notes.is_none()
    }
}
