use crate::chart::{BarChart, BarGeometry};
use crate::geom::{ScreenPoint, ScreenRect};
use crate::style::Theme;

use super::{LineStyle, RectStyle, RenderCommand, RenderList, TextStyle};

const ROW_GAP: f32 = 4.0;
const AXIS_PADDING: f32 = 6.0;
const BAR_WIDTH_FRAC: f32 = 0.6;
const BAR_CORNER_RADIUS: f32 = 2.0;
const LIMIT_LINE_WIDTH: f32 = 2.0;
const LEGEND_SWATCH: f32 = 10.0;
const LEGEND_SWATCH_GAP: f32 = 6.0;
const LEGEND_ITEM_GAP: f32 = 12.0;

/// Measures rendered text.
pub trait TextMeasurer {
    /// Width and height in pixels of `text` set at font `size`.
    fn measure(&self, text: &str, size: f32) -> (f32, f32);
}

/// Estimates text extents from the character count.
///
/// Useful for headless layout and tests where no text system is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        (text.chars().count() as f32 * size * 0.6, size * 1.2)
    }
}

struct Rows {
    top_inset: f32,
    labels: f32,
    legend: f32,
}

impl Rows {
    fn new(geometry: &BarGeometry, theme: &Theme, measurer: &dyn TextMeasurer) -> Self {
        let line_height = measurer.measure("0", theme.text_size).1;
        let row = line_height + ROW_GAP;
        Self {
            // Room for the top tick label to straddle the ceiling.
            top_inset: if geometry.ticks.is_empty() {
                0.0
            } else {
                line_height * 0.5
            },
            labels: if geometry.labels.is_empty() { 0.0 } else { row },
            legend: if geometry.legend.is_empty() { 0.0 } else { row },
        }
    }

    fn fixed(&self) -> f32 {
        self.top_inset + self.labels + self.legend
    }
}

impl BarChart {
    /// Height needed to keep the plot area at least `bar_min_height` tall.
    pub fn min_height(&self, theme: &Theme, measurer: &dyn TextMeasurer) -> f32 {
        let rows = Rows::new(&self.geometry(), theme, measurer);
        rows.fixed() + self.style().bar_min_height
    }
}

/// Lay out `chart` inside `bounds` and record the drawing commands.
///
/// The plot area is never shorter than the style's `bar_min_height`; when
/// `bounds` is too small the label and legend rows extend below it.
pub fn build_frame(
    chart: &BarChart,
    theme: &Theme,
    bounds: ScreenRect,
    measurer: &dyn TextMeasurer,
) -> RenderList {
    let mut render = RenderList::new();
    if !bounds.is_valid() {
        return render;
    }
    let geometry = chart.geometry();
    let style = chart.style();
    let rows = Rows::new(&geometry, theme, measurer);
    let text_style = TextStyle {
        color: theme.text,
        size: theme.text_size,
    };

    render.push(RenderCommand::Rect {
        rect: bounds,
        style: RectStyle {
            fill: theme.background,
            corner_radius: 0.0,
        },
    });

    let plot_height = (bounds.height() - rows.fixed()).max(style.bar_min_height);
    let plot = ScreenRect::from_origin_size(
        bounds.min.x,
        bounds.min.y + rows.top_inset,
        bounds.width(),
        plot_height,
    );

    let mut bars_area = plot;
    if !geometry.ticks.is_empty() {
        let tick_labels: Vec<(String, (f32, f32))> = geometry
            .ticks
            .iter()
            .map(|tick| {
                let text = chart.axis_formatter().format(tick.value);
                let size = measurer.measure(&text, theme.text_size);
                (text, size)
            })
            .collect();
        let label_width = tick_labels
            .iter()
            .map(|(_, (width, _))| *width)
            .fold(0.0_f32, f32::max);
        let (axis, rest) = plot.split_left(label_width + AXIS_PADDING);
        render.push(RenderCommand::Line {
            start: ScreenPoint::new(axis.max.x, axis.min.y),
            end: ScreenPoint::new(axis.max.x, axis.max.y),
            style: LineStyle {
                color: theme.axis,
                width: 1.0,
            },
        });
        for (tick, (text, (width, height))) in geometry.ticks.iter().zip(tick_labels) {
            let y = y_at(axis, tick.fraction);
            render.push(RenderCommand::Text {
                position: ScreenPoint::new(axis.max.x - AXIS_PADDING - width, y - height * 0.5),
                text,
                style: text_style.clone(),
            });
        }
        bars_area = rest.split_left(style.axis_leading_padding).1;
    }

    let slot = bars_area.width() / geometry.bars.len().max(1) as f32;
    let bar_width = slot * BAR_WIDTH_FRAC;
    for (index, (bar, point)) in geometry.bars.iter().zip(&geometry.series).enumerate() {
        let height = bar.fraction as f32 * bars_area.height();
        if !bar.visible || height <= 0.0 {
            continue;
        }
        let x = bars_area.min.x + slot * index as f32 + (slot - bar_width) * 0.5;
        render.push(RenderCommand::Rect {
            rect: ScreenRect::from_origin_size(x, bars_area.max.y - height, bar_width, height),
            style: RectStyle {
                fill: point.legend().color,
                corner_radius: BAR_CORNER_RADIUS.min(bar_width * 0.5),
            },
        });
    }

    if let Some(limit) = &geometry.limit {
        let y = y_at(bars_area, limit.fraction);
        render.push(RenderCommand::Line {
            start: ScreenPoint::new(bars_area.min.x, y),
            end: ScreenPoint::new(bars_area.max.x, y),
            style: LineStyle {
                color: limit.legend.color,
                width: LIMIT_LINE_WIDTH,
            },
        });
    }

    let mut row_top = plot.max.y + ROW_GAP * 0.5;
    if rows.labels > 0.0 {
        for &index in &geometry.labels {
            let text = geometry.series[index].label();
            let (width, _) = measurer.measure(text, theme.text_size);
            let center = bars_area.min.x + slot * (index as f32 + 0.5);
            render.push(RenderCommand::Text {
                position: ScreenPoint::new(center - width * 0.5, row_top),
                text: text.to_string(),
                style: text_style.clone(),
            });
        }
        row_top += rows.labels;
    }

    if rows.legend > 0.0 {
        let legend_style = TextStyle {
            color: theme.legend_text,
            size: theme.text_size,
        };
        let mut x = bars_area.min.x;
        for legend in &geometry.legend {
            let (width, height) = measurer.measure(&legend.label, theme.text_size);
            let swatch_top = row_top + (height - LEGEND_SWATCH).max(0.0) * 0.5;
            render.push(RenderCommand::Rect {
                rect: ScreenRect::from_origin_size(x, swatch_top, LEGEND_SWATCH, LEGEND_SWATCH),
                style: RectStyle {
                    fill: legend.color,
                    corner_radius: LEGEND_SWATCH * 0.5,
                },
            });
            x += LEGEND_SWATCH + LEGEND_SWATCH_GAP;
            render.push(RenderCommand::Text {
                position: ScreenPoint::new(x, row_top),
                text: legend.label.clone(),
                style: legend_style.clone(),
            });
            x += width + LEGEND_ITEM_GAP;
        }
    }

    render
}

fn y_at(rect: ScreenRect, fraction: f64) -> f32 {
    rect.max.y - fraction as f32 * rect.height()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legend::Legend;
    use crate::render::Color;
    use crate::series::DataPoint;
    use crate::style::BarChartStyle;

    const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

    fn chart(style: BarChartStyle) -> BarChart {
        BarChart::builder()
            .point(DataPoint::new(10.0, "A", Legend::new(RED, "Red")))
            .point(DataPoint::new(30.0, "B", Legend::new(BLUE, "Blue")))
            .limit(DataPoint::new(20.0, "T", Legend::new(GREEN, "Target")))
            .style(style)
            .build()
    }

    fn texts(render: &RenderList) -> Vec<&str> {
        render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn draws_visible_bars_only() {
        let style = BarChartStyle::default()
            .with_axis(false)
            .with_labels(false)
            .with_legends(false);
        let bounds = ScreenRect::from_origin_size(0.0, 0.0, 300.0, 200.0);
        let render = build_frame(&chart(style), &Theme::light(), bounds, &HeuristicTextMeasurer);
        let fills: Vec<Color> = render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Rect { style, .. } => Some(style.fill),
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![Theme::light().background, RED, BLUE]);
        assert!(texts(&render).is_empty());
    }

    #[test]
    fn bar_heights_follow_fractions() {
        let style = BarChartStyle::default()
            .with_axis(false)
            .with_labels(false)
            .with_legends(false);
        let bounds = ScreenRect::from_origin_size(0.0, 0.0, 300.0, 360.0);
        let render = build_frame(&chart(style), &Theme::light(), bounds, &HeuristicTextMeasurer);
        let heights: Vec<f32> = render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Rect { rect, style } if style.fill == BLUE => Some(rect.height()),
                _ => None,
            })
            .collect();
        assert_eq!(heights.len(), 1);
        assert!((heights[0] - 300.0).abs() < 1e-3);

        let limit_y = render.commands().iter().find_map(|command| match command {
            RenderCommand::Line { start, style, .. } if style.color == GREEN => Some(start.y),
            _ => None,
        });
        assert!((limit_y.expect("limit line") - 160.0).abs() < 1e-3);
    }

    #[test]
    fn labels_axis_and_legend_text() {
        let bounds = ScreenRect::from_origin_size(0.0, 0.0, 300.0, 240.0);
        let render = build_frame(
            &chart(BarChartStyle::default()),
            &Theme::dark(),
            bounds,
            &HeuristicTextMeasurer,
        );
        assert_eq!(
            texts(&render),
            vec!["0", "18", "36", "A", "B", "Target", "Red", "Blue"]
        );
    }

    #[test]
    fn plot_never_shrinks_below_min_height() {
        let chart = chart(BarChartStyle::default());
        let theme = Theme::light();
        let min = chart.min_height(&theme, &HeuristicTextMeasurer);
        assert!(min > chart.style().bar_min_height);

        let bounds = ScreenRect::from_origin_size(0.0, 0.0, 300.0, 20.0);
        let render = build_frame(&chart, &theme, bounds, &HeuristicTextMeasurer);
        let tallest = render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Rect { rect, style } if style.fill == BLUE => Some(rect.height()),
                _ => None,
            })
            .fold(0.0_f32, f32::max);
        assert!((tallest - 100.0 * 30.0 / 36.0).abs() < 1e-3);
    }

    #[test]
    fn empty_bounds_render_nothing() {
        let bounds = ScreenRect::from_origin_size(0.0, 0.0, 0.0, 0.0);
        let render = build_frame(
            &chart(BarChartStyle::default()),
            &Theme::light(),
            bounds,
            &HeuristicTextMeasurer,
        );
        assert!(render.is_empty());
    }
}
