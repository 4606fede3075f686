//! Per-user display and retention preferences

use serde::{Deserialize, Serialize};

/// User preferences persisted alongside the reading partition.
///
/// Every field is defaulted so a partial settings document (or none at all)
/// behaves like a fresh install.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Temperature display unit: `"F"` or `"C"`
    #[serde(default = "defaults::temperature_unit")]
    pub temperature_unit: String,
    /// Weight display unit: `"lbs"` or `"kg"`
    #[serde(default = "defaults::weight_unit")]
    pub weight_unit: String,
    /// Height display unit: `"ft"`, `"in"`, or `"cm"`
    #[serde(default = "defaults::height_unit")]
    pub height_unit: String,
    /// Date display format
    #[serde(default = "defaults::date_format")]
    pub date_format: String,
    /// Whether reminder notifications are enabled
    #[serde(default = "defaults::notifications")]
    pub notifications: bool,
    /// Readings older than this are removed by the retention sweeper
    #[serde(default = "defaults::data_retention_days")]
    pub data_retention_days: u32,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            temperature_unit: defaults::temperature_unit(),
            weight_unit: defaults::weight_unit(),
            height_unit: defaults::height_unit(),
            date_format: defaults::date_format(),
            notifications: defaults::notifications(),
            data_retention_days: defaults::data_retention_days(),
        }
    }
}

impl UserSettings {
    /// True when the configured temperature unit is Celsius.
    pub fn uses_celsius(&self) -> bool {
        self.temperature_unit.eq_ignore_ascii_case("C")
    }
}

mod defaults {
    pub fn temperature_unit() -> String {
        "F".to_string()
    }
    pub fn weight_unit() -> String {
        "lbs".to_string()
    }
    pub fn height_unit() -> String {
        "ft".to_string()
    }
    pub fn date_format() -> String {
        "MM/DD/YYYY".to_string()
    }
    pub fn notifications() -> bool {
        true
    }
    pub fn data_retention_days() -> u32 {
        365
    }
}
