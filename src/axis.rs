//! Value axis ticks and tick label formatting.

use std::sync::Arc;

use crate::scale::value_fraction;

/// A tick on the value axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTick {
    /// Data value at the tick.
    pub value: f64,
    /// Height fraction of the tick, measured from the baseline.
    pub fraction: f64,
}

/// Evenly spaced ticks from 0 up to `max_value`.
///
/// `count == 1` yields only the ceiling tick. A zero ceiling yields a single
/// tick at 0 since every other tick would coincide with it.
pub fn axis_ticks(max_value: f64, count: usize) -> Vec<AxisTick> {
    if count == 0 {
        return Vec::new();
    }
    if max_value <= 0.0 || !max_value.is_finite() {
        return vec![AxisTick {
            value: 0.0,
            fraction: 0.0,
        }];
    }
    if count == 1 {
        return vec![AxisTick {
            value: max_value,
            fraction: 1.0,
        }];
    }
    let step = max_value / (count - 1) as f64;
    (0..count)
        .map(|i| {
            let value = if i + 1 == count {
                max_value
            } else {
                step * i as f64
            };
            AxisTick {
                value,
                fraction: value_fraction(value, max_value),
            }
        })
        .collect()
}

/// Formatter for axis tick labels.
#[derive(Clone, Default)]
pub enum AxisFormatter {
    /// Up to two decimals, trailing zeros removed.
    #[default]
    Default,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Wrap a closure as a custom formatter.
    pub fn custom(formatter: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(formatter))
    }

    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => format_compact(value),
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "AxisFormatter::Default"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}

fn format_compact(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
