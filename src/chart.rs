//! Bar chart model, builder and geometry pass.

use crate::axis::{AxisFormatter, AxisTick, axis_ticks};
use crate::labels::select_labels;
use crate::legend::{Legend, build_legend};
use crate::scale::{height_fraction, max_value};
use crate::series::{DataPoint, prepare};
use crate::style::{BarChartStyle, StyleProfile, resolve_style};

/// A bar chart: data points, an optional limit line and a resolved style.
#[derive(Debug, Clone)]
pub struct BarChart {
    points: Vec<DataPoint>,
    limit: Option<DataPoint>,
    style: BarChartStyle,
    axis_formatter: AxisFormatter,
}

impl BarChart {
    /// Create a chart with the standard profile style.
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self::builder().data(points).build()
    }

    /// Start building a chart with custom configuration.
    pub fn builder() -> BarChartBuilder {
        BarChartBuilder::default()
    }

    /// Raw data points, without the trailing point.
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Limit line point, if any.
    pub fn limit(&self) -> Option<&DataPoint> {
        self.limit.as_ref()
    }

    /// Resolved style.
    pub fn style(&self) -> &BarChartStyle {
        &self.style
    }

    /// Tick label formatter.
    pub fn axis_formatter(&self) -> &AxisFormatter {
        &self.axis_formatter
    }

    /// Compute everything the renderer needs from the current data and style.
    pub fn geometry(&self) -> BarGeometry {
        let style = &self.style;
        let series = prepare(&self.points);
        let max = max_value(&series, style.max_y);

        let negatives = self
            .points
            .iter()
            .chain(self.limit.as_ref())
            .filter(|point| point.value() < 0.0)
            .count();
        if negatives > 0 {
            tracing::warn!(negatives, "negative bar values render as empty bars");
        }

        let bars = series
            .iter()
            .map(|point| BarSlot {
                fraction: height_fraction(point, max),
                visible: point.is_visible(),
            })
            .collect();
        let ticks = if style.show_axis {
            axis_ticks(max, style.axis_tick_count)
        } else {
            Vec::new()
        };
        let labels = if style.show_labels {
            select_labels(&series, style.label_count)
        } else {
            Vec::new()
        };
        let legend = if style.show_legends {
            build_legend(&series, self.limit.as_ref())
        } else {
            Vec::new()
        };
        let limit = self.limit.as_ref().map(|point| LimitLine {
            fraction: height_fraction(point, max),
            legend: point.legend().clone(),
        });

        tracing::debug!(
            bars = series.len(),
            max_value = max,
            labels = labels.len(),
            legend = legend.len(),
            "computed bar chart geometry"
        );

        BarGeometry {
            series,
            max_value: max,
            bars,
            ticks,
            labels,
            legend,
            limit,
        }
    }
}

/// Height and visibility of one bar slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSlot {
    /// Bar height as a fraction of the plot height.
    pub fraction: f64,
    /// Hidden slots reserve space but are not drawn.
    pub visible: bool,
}

/// Horizontal reference line.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitLine {
    /// Height of the line as a fraction of the plot height.
    pub fraction: f64,
    /// Legend supplying the line color.
    pub legend: Legend,
}

/// Derived chart geometry.
///
/// `series` is the prepared series, trailing point included; `bars` has one
/// slot per entry of `series` and `labels` indexes into it.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    /// Prepared series.
    pub series: Vec<DataPoint>,
    /// Scale ceiling shared by bars, ticks and the limit line.
    pub max_value: f64,
    /// One slot per prepared point.
    pub bars: Vec<BarSlot>,
    /// Value axis ticks, empty when the axis is hidden.
    pub ticks: Vec<AxisTick>,
    /// Indices of labeled points, empty when labels are hidden.
    pub labels: Vec<usize>,
    /// Legend entries, empty when legends are hidden.
    pub legend: Vec<Legend>,
    /// Limit line, if a limit point was supplied.
    pub limit: Option<LimitLine>,
}

/// Builder for configuring a chart before construction.
#[derive(Debug, Default)]
pub struct BarChartBuilder {
    points: Vec<DataPoint>,
    limit: Option<DataPoint>,
    style: Option<BarChartStyle>,
    profile: StyleProfile,
    axis_formatter: AxisFormatter,
}

impl BarChartBuilder {
    /// Replace the data points.
    pub fn data(mut self, points: impl IntoIterator<Item = DataPoint>) -> Self {
        self.points = points.into_iter().collect();
        self
    }

    /// Append a single data point.
    pub fn point(mut self, point: DataPoint) -> Self {
        self.points.push(point);
        self
    }

    /// Set the limit line.
    pub fn limit(mut self, limit: DataPoint) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Use an explicit style instead of the profile default.
    pub fn style(mut self, style: BarChartStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Select the profile used when no explicit style is set.
    pub fn profile(mut self, profile: StyleProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the tick label formatter.
    pub fn axis_formatter(mut self, formatter: AxisFormatter) -> Self {
        self.axis_formatter = formatter;
        self
    }

    /// Build the chart.
    pub fn build(self) -> BarChart {
        BarChart {
            points: self.points,
            limit: self.limit,
            style: resolve_style(self.style, self.profile),
            axis_formatter: self.axis_formatter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;

    fn legend(label: &str, r: f32) -> Legend {
        Legend::new(Color::new(r, 0.2, 0.4, 1.0), label)
    }

    fn sample_chart(style: BarChartStyle) -> BarChart {
        BarChart::builder()
            .point(DataPoint::new(10.0, "A", legend("L1", 0.1)))
            .point(DataPoint::new(30.0, "B", legend("L2", 0.2)))
            .limit(DataPoint::new(20.0, "T", legend("L3", 0.3)))
            .style(style)
            .build()
    }

    #[test]
    fn worked_example() {
        let geometry = sample_chart(BarChartStyle::default()).geometry();
        assert_eq!(geometry.series.len(), 3);
        assert!((geometry.series[2].value() - 36.0).abs() < 1e-9);
        assert!((geometry.max_value - 36.0).abs() < 1e-9);
        assert!((geometry.bars[1].fraction - 30.0 / 36.0).abs() < 1e-9);
        assert!(!geometry.bars[2].visible);
        assert_eq!(geometry.labels, vec![0, 1]);
        assert_eq!(
            geometry.legend,
            vec![legend("L3", 0.3), legend("L1", 0.1), legend("L2", 0.2)]
        );
        let limit = geometry.limit.expect("limit line");
        assert!((limit.fraction - 20.0 / 36.0).abs() < 1e-9);
        let top = geometry.ticks.last().expect("ceiling tick");
        assert!((top.value - 36.0).abs() < 1e-9);
        assert_eq!(top.fraction, 1.0);
    }

    #[test]
    fn fixed_ceiling_is_shared() {
        let geometry = sample_chart(BarChartStyle::default().with_max_y(Some(40.0))).geometry();
        assert_eq!(geometry.max_value, 40.0);
        assert!((geometry.bars[0].fraction - 0.25).abs() < 1e-9);
        assert!((geometry.bars[2].fraction - 0.9).abs() < 1e-9);
        assert!((geometry.limit.expect("limit").fraction - 0.5).abs() < 1e-9);
        assert_eq!(geometry.ticks.last().map(|tick| tick.value), Some(40.0));
    }

    #[test]
    fn low_fixed_ceiling_clamps_bars() {
        let geometry = sample_chart(BarChartStyle::default().with_max_y(Some(25.0))).geometry();
        assert_eq!(geometry.max_value, 25.0);
        assert!((geometry.bars[0].fraction - 0.4).abs() < 1e-9);
        assert_eq!(geometry.bars[1].fraction, 1.0);
        assert_eq!(geometry.bars[2].fraction, 1.0);
        assert!((geometry.limit.expect("limit").fraction - 0.8).abs() < 1e-9);
    }

    #[test]
    fn hidden_guides_produce_no_geometry() {
        let style = BarChartStyle::default()
            .with_axis(false)
            .with_labels(false)
            .with_legends(false);
        let geometry = sample_chart(style).geometry();
        assert!(geometry.ticks.is_empty());
        assert!(geometry.labels.is_empty());
        assert!(geometry.legend.is_empty());
        assert_eq!(geometry.bars.len(), 3);
    }

    #[test]
    fn empty_chart_is_total() {
        let geometry = BarChart::new(Vec::new()).geometry();
        assert_eq!(geometry.series.len(), 1);
        assert_eq!(geometry.max_value, 0.0);
        assert_eq!(geometry.bars[0].fraction, 0.0);
        assert!(geometry.labels.is_empty());
        assert!(geometry.legend.is_empty());
        assert!(geometry.limit.is_none());
    }

    #[test]
    fn builder_resolves_profile_default() {
        let chart = BarChart::builder().profile(StyleProfile::Compact).build();
        assert_eq!(chart.style().bar_min_height, 50.0);
        assert!(chart.points().is_empty());
    }

    #[test]
    fn negative_values_pass_through() {
        let chart = BarChart::new(vec![
            DataPoint::new(-5.0, "neg", legend("L1", 0.1)),
            DataPoint::new(10.0, "pos", legend("L1", 0.1)),
        ]);
        let geometry = chart.geometry();
        assert_eq!(geometry.series[0].value(), -5.0);
        assert_eq!(geometry.bars[0].fraction, 0.0);
        assert!((geometry.max_value - 12.0).abs() < 1e-9);
    }
}
