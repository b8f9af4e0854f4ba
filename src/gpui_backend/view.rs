use gpui::prelude::*;
use gpui::{Bounds, Context, Pixels, Window, canvas, div, px};

use crate::chart::BarChart;
use crate::geom::ScreenRect;
use crate::render::build_frame;
use crate::style::Theme;

use super::paint::{paint_list, to_hsla};
use super::text::GpuiTextMeasurer;

/// A GPUI view that renders a [`BarChart`].
///
/// The view is stateless between frames: every render lays the chart out
/// again from its data and style.
#[derive(Debug, Clone)]
pub struct BarChartView {
    chart: BarChart,
    theme: Theme,
}

impl BarChartView {
    /// Create a view with the default theme.
    pub fn new(chart: BarChart) -> Self {
        Self::with_theme(chart, Theme::default())
    }

    /// Create a view with a custom theme.
    pub fn with_theme(chart: BarChart, theme: Theme) -> Self {
        Self { chart, theme }
    }

    /// Access the chart.
    pub fn chart(&self) -> &BarChart {
        &self.chart
    }

    /// Replace the chart. Call `cx.notify()` afterwards to repaint.
    pub fn set_chart(&mut self, chart: BarChart) {
        self.chart = chart;
    }

    /// Access the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

impl Render for BarChartView {
    fn render(&mut self, window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let min_height = self
            .chart
            .min_height(&self.theme, &GpuiTextMeasurer::new(window));
        let chart = self.chart.clone();
        let theme = self.theme.clone();
        let background = to_hsla(theme.background);

        div()
            .size_full()
            .min_h(px(min_height))
            .bg(background)
            .child(
                canvas(
                    move |bounds, window, _| {
                        let measurer = GpuiTextMeasurer::new(window);
                        build_frame(&chart, &theme, screen_rect(bounds), &measurer)
                    },
                    move |_, render, window, cx| {
                        paint_list(&render, window, cx);
                    },
                )
                .size_full(),
            )
    }
}

fn screen_rect(bounds: Bounds<Pixels>) -> ScreenRect {
    ScreenRect::from_origin_size(
        f32::from(bounds.origin.x),
        f32::from(bounds.origin.y),
        f32::from(bounds.size.width),
        f32::from(bounds.size.height),
    )
}
