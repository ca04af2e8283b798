//! Descriptive statistics over f64 slices.
//!
//! Degenerate cases are policy, not accident:
//! - empty slices summarize to all-zero values (callers treat zero-row
//!   inputs as "no output rows", so these never leak into results),
//! - a single sample has population standard deviation 0, never NaN,
//! - a zero standard deviation is replaced by 1.0 when used as a z-score
//!   divisor, so z-scores over constant data are all 0 instead of NaN.

use serde::{Deserialize, Serialize};

/// Mean/median/max/std/count of one sample set.
///
/// The standard deviation is the population definition (divide by n).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveSummary {
    pub mean: f64,
    pub median: f64,
    pub max: f64,
    pub std: f64,
    pub count: u64,
}

/// Arithmetic mean. Empty slice => 0.0.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median via sorted copy; even-length input averages the two middles.
/// Empty slice => 0.0.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Maximum value. Empty slice => 0.0.
pub fn max_value(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Population standard deviation (divide by n). Fewer than two samples => 0.0.
pub fn population_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Population std with the z-score divisor fallback: 0 => 1.0.
pub fn std_or_one(values: &[f64]) -> f64 {
    let s = population_std(values);
    if s == 0.0 {
        1.0
    } else {
        s
    }
}

/// Z-scores against the slice's own mean and population std.
///
/// Constant input (std 0) yields all-zero scores via the 1.0 fallback.
pub fn z_scores(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let m = mean(values);
    let s = std_or_one(values);
    values.iter().map(|v| (v - m) / s).collect()
}

/// Full descriptive summary of one sample set.
pub fn summarize(values: &[f64]) -> DescriptiveSummary {
    DescriptiveSummary {
        mean: mean(values),
        median: median(values),
        max: max_value(values),
        std: population_std(values),
        count: values.len() as u64,
    }
}

/// Round to two decimal places (half away from zero, as `f64::round`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
