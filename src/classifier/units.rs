//! Unit conversions for classification and BMI calculation
//!
//! Conversions are deliberately total: an unrecognized unit degrades to the
//! base unit instead of failing, keeping every classifier operation a pure
//! total function.

use crate::types::conversion::{FT_TO_M, IN_TO_M, LBS_TO_KG};

/// Convert a temperature between Celsius and Fahrenheit.
///
/// Identity when the units are equal; an unrecognized pair returns the
/// input unchanged (defensive no-op, not an error).
pub fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> f64 {
    if from_unit == to_unit {
        return value;
    }
    match (from_unit, to_unit) {
        ("C", "F") => value * 9.0 / 5.0 + 32.0,
        ("F", "C") => (value - 32.0) * 5.0 / 9.0,
        _ => value,
    }
}

/// Convert a height to meters. Unrecognized units are treated as cm.
pub fn height_to_meters(height: f64, unit: &str) -> f64 {
    match unit {
        "ft" => height * FT_TO_M,
        "in" => height * IN_TO_M,
        // "cm" and anything unrecognized
        _ => height / 100.0,
    }
}

/// Convert a weight to kilograms. Unrecognized units are treated as kg.
pub fn weight_to_kg(weight: f64, unit: &str) -> f64 {
    match unit {
        "lbs" => weight * LBS_TO_KG,
        // "kg" and anything unrecognized
        _ => weight,
    }
}

/// True when a reading's display unit denotes Celsius (`"C"` or `"°C"`).
pub fn is_celsius_unit(unit: &str) -> bool {
    unit.trim_start_matches('°').eq_ignore_ascii_case("c")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_c_to_f() {
        assert!((convert_temperature(0.0, "C", "F") - 32.0).abs() < 1e-9);
        assert!((convert_temperature(37.0, "C", "F") - 98.6).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_f_to_c() {
        let c = convert_temperature(100.0, "F", "C");
        assert!((c - 37.777_777_777_777_78).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_round_trip() {
        for x in [-40.0, 0.0, 36.6, 98.6, 104.2] {
            let back = convert_temperature(convert_temperature(x, "C", "F"), "F", "C");
            assert!((back - x).abs() < 1e-9, "round trip drifted for {x}");
        }
    }

    #[test]
    fn test_temperature_identity_and_unrecognized() {
        assert_eq!(convert_temperature(98.6, "F", "F"), 98.6);
        assert_eq!(convert_temperature(98.6, "F", "K"), 98.6);
    }

    #[test]
    fn test_height_conversions() {
        assert!((height_to_meters(180.0, "cm") - 1.8).abs() < 1e-9);
        assert!((height_to_meters(6.0, "ft") - 1.8288).abs() < 1e-9);
        assert!((height_to_meters(70.0, "in") - 1.778).abs() < 1e-9);
        // Unrecognized defaults to cm-as-given
        assert!((height_to_meters(180.0, "furlong") - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_weight_conversions() {
        assert_eq!(weight_to_kg(80.0, "kg"), 80.0);
        assert!((weight_to_kg(176.37, "lbs") - 80.0).abs() < 0.01);
        assert_eq!(weight_to_kg(80.0, "stone"), 80.0);
    }

    #[test]
    fn test_celsius_unit_detection() {
        assert!(is_celsius_unit("C"));
        assert!(is_celsius_unit("°C"));
        assert!(is_celsius_unit("c"));
        assert!(!is_celsius_unit("F"));
        assert!(!is_celsius_unit("°F"));
    }
}
