//! Legend entries and the legend builder.

use serde::{Deserialize, Serialize};

use crate::render::Color;
use crate::series::DataPoint;

/// A color swatch plus a short text label identifying a group of bars.
///
/// Two legends are the same entry when both color and label match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    /// Swatch and bar fill color.
    pub color: Color,
    /// Display label.
    pub label: String,
}

impl Legend {
    /// Create a legend entry.
    pub fn new(color: Color, label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
        }
    }

    /// Legend carried by the synthetic trailing point.
    pub(crate) fn none() -> Self {
        Self::new(Color::TRANSPARENT, "")
    }
}

/// Collect the legend entries for a series.
///
/// Entries are de-duplicated by `(color, label)` in first-seen order. When a
/// `limit` is supplied its legend comes first. Invisible points are skipped.
pub fn build_legend(points: &[DataPoint], limit: Option<&DataPoint>) -> Vec<Legend> {
    let mut out: Vec<Legend> = Vec::new();
    let visible = points.iter().filter(|point| point.is_visible());
    for point in limit.into_iter().chain(visible) {
        let legend = point.legend();
        if !out.contains(legend) {
            out.push(legend.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::prepare;

    fn red() -> Legend {
        Legend::new(Color::new(1.0, 0.0, 0.0, 1.0), "Red")
    }

    fn blue() -> Legend {
        Legend::new(Color::new(0.0, 0.0, 1.0, 1.0), "Blue")
    }

    #[test]
    fn dedupes_in_first_seen_order() {
        let points = [
            DataPoint::new(1.0, "a", blue()),
            DataPoint::new(2.0, "b", red()),
            DataPoint::new(3.0, "c", blue()),
        ];
        assert_eq!(build_legend(&points, None), vec![blue(), red()]);
    }

    #[test]
    fn limit_comes_first_even_when_shared() {
        let points = [
            DataPoint::new(1.0, "a", blue()),
            DataPoint::new(2.0, "b", red()),
        ];
        let limit = DataPoint::new(1.5, "target", red());
        assert_eq!(build_legend(&points, Some(&limit)), vec![red(), blue()]);
    }

    #[test]
    fn same_label_different_color_is_distinct() {
        let other = Legend::new(Color::new(0.0, 1.0, 0.0, 1.0), "Red");
        let points = [
            DataPoint::new(1.0, "a", red()),
            DataPoint::new(2.0, "b", other.clone()),
        ];
        assert_eq!(build_legend(&points, None), vec![red(), other]);
    }

    #[test]
    fn skips_invisible_and_synthetic_points() {
        let points = prepare(&[
            DataPoint::new(1.0, "a", red()),
            DataPoint::hidden(2.0, "b", blue()),
        ]);
        assert_eq!(build_legend(&points, None), vec![red()]);
    }
}
