//! Data points and series preparation.

use serde::{Deserialize, Serialize};

use crate::legend::Legend;

/// Factor applied to the series maximum to size the synthetic trailing point.
pub const TRAILING_HEADROOM: f64 = 1.2;

/// A single labeled bar value.
///
/// Values are expected to be non-negative. Negative values are kept as-is
/// and render as zero-height bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    value: f64,
    label: String,
    legend: Legend,
    #[serde(default = "visible_by_default")]
    visible: bool,
}

fn visible_by_default() -> bool {
    true
}

impl DataPoint {
    /// Create a visible data point.
    pub fn new(value: f64, label: impl Into<String>, legend: Legend) -> Self {
        Self {
            value,
            label: label.into(),
            legend,
            visible: true,
        }
    }

    /// Create a data point that takes part in scaling but is never drawn.
    pub fn hidden(value: f64, label: impl Into<String>, legend: Legend) -> Self {
        Self {
            visible: false,
            ..Self::new(value, label, legend)
        }
    }

    /// Raw value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value used for scaling. Equal to [`value`](Self::value) for bar charts.
    pub fn end_value(&self) -> f64 {
        self.value
    }

    /// Category label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Legend this point belongs to.
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Whether the point is drawn, labeled and listed in the legend.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Largest [`end_value`](DataPoint::end_value) in `points`, or `None` when empty.
pub fn series_max(points: &[DataPoint]) -> Option<f64> {
    points.iter().map(DataPoint::end_value).reduce(f64::max)
}

/// Append the invisible trailing point that reserves space after the last bar.
///
/// Its value is [`TRAILING_HEADROOM`] times the series maximum (0 for an
/// empty series), so it also raises the automatic scale ceiling.
///
/// Call this exactly once per raw series: feeding prepared output back in
/// appends a second trailing point.
pub fn prepare(points: &[DataPoint]) -> Vec<DataPoint> {
    let base = series_max(points).unwrap_or(0.0);
    let mut prepared = Vec::with_capacity(points.len() + 1);
    prepared.extend_from_slice(points);
    prepared.push(DataPoint::hidden(
        base * TRAILING_HEADROOM,
        "",
        Legend::none(),
    ));
    prepared
}
