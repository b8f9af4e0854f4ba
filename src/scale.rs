//! Vertical scaling from data values to height fractions.
//!
//! Bars, axis ticks and the limit line must all be mapped with the same
//! ceiling returned by [`max_value`] to line up.

use crate::series::{DataPoint, series_max};

/// Scale ceiling for a series.
///
/// Returns `explicit_max` when set. Otherwise returns the largest
/// [`end_value`](DataPoint::end_value) across all points, hidden ones
/// included, so a prepared series scales to its trailing headroom. Empty or
/// all-negative input yields 0.
pub fn max_value(points: &[DataPoint], explicit_max: Option<f64>) -> f64 {
    if let Some(max) = explicit_max {
        return max;
    }
    series_max(points).map_or(0.0, |max| max.max(0.0))
}

/// Fraction of the chart height covered by `value`, in `0.0..=1.0`.
///
/// A ceiling of zero (or below) maps everything to 0 instead of dividing by
/// zero. Values beyond the ceiling clamp to 1, negative values to 0.
pub fn value_fraction(value: f64, max_value: f64) -> f64 {
    if max_value <= 0.0 || !max_value.is_finite() {
        return 0.0;
    }
    let fraction = value / max_value;
    if fraction.is_nan() {
        return 0.0;
    }
    fraction.clamp(0.0, 1.0)
}

/// Fraction of the chart height covered by a point's bar.
pub fn height_fraction(point: &DataPoint, max_value: f64) -> f64 {
    value_fraction(point.value(), max_value)
}
