//! Series analyzer: filters, latest-value lookup, and window statistics
//!
//! Pure functions over an in-memory reading collection. Nothing here does
//! I/O or holds state — callers (the API layer, the dashboard summary) load
//! readings from storage and pass them in.

use chrono::{DateTime, Duration, Utc};
use statrs::statistics::Statistics;

use crate::types::{Reading, SeriesStatistics, VitalType};

/// Default statistics window when the caller does not supply one (days).
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Readings of one vital type, preserving input order.
pub fn filter_by_type(readings: &[Reading], vital_type: VitalType) -> Vec<&Reading> {
    readings
        .iter()
        .filter(|r| r.vital_type == vital_type)
        .collect()
}

/// Readings whose timestamp falls in `[start, end]`, both bounds inclusive.
pub fn filter_by_date_range<'a>(
    readings: &'a [Reading],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<&'a Reading> {
    readings
        .iter()
        .filter(|r| r.timestamp >= start && r.timestamp <= end)
        .collect()
}

/// The reading of a type with the maximum timestamp.
///
/// Input order does not matter. When two readings share a timestamp the
/// winner is unspecified (whichever the scan keeps last).
pub fn latest(readings: &[Reading], vital_type: VitalType) -> Option<&Reading> {
    readings
        .iter()
        .filter(|r| r.vital_type == vital_type)
        .max_by_key(|r| r.timestamp)
}

/// Statistics for one vital type over the trailing window ending now.
pub fn statistics(
    readings: &[Reading],
    vital_type: VitalType,
    window_days: u32,
) -> SeriesStatistics {
    statistics_at(readings, vital_type, window_days, Utc::now())
}

/// Statistics over `[now - window_days, now]`, with an explicit `now` so
/// the window is deterministic under test.
///
/// Only scalar values aggregate; composite blood-pressure pairs carry no
/// single number and are skipped entirely, so a Blood Pressure series
/// reports the empty result instead of NaN-corrupted aggregates.
pub fn statistics_at(
    readings: &[Reading],
    vital_type: VitalType,
    window_days: u32,
    now: DateTime<Utc>,
) -> SeriesStatistics {
    let start = now - Duration::days(i64::from(window_days));

    let values: Vec<f64> = readings
        .iter()
        .filter(|r| r.vital_type == vital_type)
        .filter(|r| r.timestamp >= start && r.timestamp <= now)
        .filter_map(|r| r.value.as_scalar())
        .collect();

    if values.is_empty() {
        return SeriesStatistics::empty();
    }

    let average = values.iter().mean();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    SeriesStatistics {
        count: values.len(),
        average: Some(round2(average)),
        min: Some(min),
        max: Some(max),
        trend: Some(trend(&values)),
    }
}

/// Ordinary least-squares slope of value against 0-based sequence index.
///
/// Treats readings as equally spaced — the slope is the average
/// value-change per successive reading, not per unit time. Returns `0.0`
/// for fewer than 2 values (the denominator degenerates at n = 1).
pub fn trend(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let sum_x = (0..values.len()).map(|x| x as f64).sum::<f64>();
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values
        .iter()
        .enumerate()
        .map(|(x, y)| x as f64 * y)
        .sum();
    let sum_xx: f64 = (0..values.len()).map(|x| (x * x) as f64).sum();

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
    round2(slope)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
