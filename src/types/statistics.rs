//! Aggregate statistics over a reading series

use serde::{Deserialize, Serialize};

/// Aggregates over a type- and window-filtered reading series.
///
/// All optional fields are `None` (JSON null) when the filtered series is
/// empty. `average` and `trend` are rounded to 2 decimals; `min`/`max` are
/// the unrounded extrema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStatistics {
    pub count: usize,
    pub average: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Least-squares slope per successive reading: positive = rising,
    /// negative = falling. Not a per-unit-time rate.
    pub trend: Option<f64>,
}

impl SeriesStatistics {
    /// The well-defined result for an empty series.
    pub fn empty() -> Self {
        Self {
            count: 0,
            average: None,
            min: None,
            max: None,
            trend: None,
        }
    }
}
