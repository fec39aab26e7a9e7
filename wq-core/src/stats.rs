//! Descriptive order statistics for box plots.

use crate::rounding::round3;
use serde::{Deserialize, Serialize};

/// Five-number summary of a distribution, plus its mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxStatistics {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
}

impl BoxStatistics {
    /// Summarize `values`.
    ///
    /// Non-finite entries are discarded first. Returns `None` when nothing
    /// finite remains. All outputs are rounded to chart precision.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted = sorted_finite(values);
        let (&first, &last) = (sorted.first()?, sorted.last()?);
        Some(Self {
            min: round3(first),
            q1: round3(quantile_sorted(&sorted, 0.25)?),
            median: round3(quantile_sorted(&sorted, 0.5)?),
            q3: round3(quantile_sorted(&sorted, 0.75)?),
            max: round3(last),
            mean: mean(&sorted).map(round3),
        })
    }

    /// Replace the whisker ends, e.g. with separately declared extremes.
    pub fn with_whiskers(self, min: f64, max: f64) -> Self {
        Self {
            min: round3(min),
            max: round3(max),
            ..self
        }
    }

    /// True when min ≤ q1 ≤ median ≤ q3 ≤ max.
    pub fn is_ordered(&self) -> bool {
        self.min <= self.q1 && self.q1 <= self.median && self.median <= self.q3 && self.q3 <= self.max
    }
}

fn sorted_finite(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Linear-interpolation quantile of an ascending slice.
///
/// The position is `(n - 1) * q`. A position that lands on an index returns
/// that element unmodified; otherwise the two bracketing elements are
/// interpolated.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let position = (sorted.len() - 1) as f64 * q;
    let lower = position.floor() as usize;
    let fraction = position - position.floor();
    if fraction == 0.0 || lower + 1 >= sorted.len() {
        return Some(sorted[lower]);
    }
    let (lo, hi) = (sorted[lower], sorted[lower + 1]);
    Some(lo + (hi - lo) * fraction)
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Smallest finite value.
pub fn min_of(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .min_by(f64::total_cmp)
}

/// Largest finite value.
pub fn max_of(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .max_by(f64::total_cmp)
}
