//! gpui_barchart renders labeled bar charts for GPUI applications.
//!
//! The chart core is a set of pure functions that turn data points and a
//! [`BarChartStyle`] into [`BarGeometry`] and then into a backend-agnostic
//! [`RenderList`]. The optional `gpui` feature adds a view that paints it.

#![forbid(unsafe_code)]

pub mod axis;
pub mod chart;
pub mod geom;
#[cfg(feature = "gpui")]
pub mod gpui_backend;
pub mod labels;
pub mod legend;
pub mod render;
pub mod scale;
pub mod series;
pub mod style;

pub use axis::{AxisFormatter, AxisTick, axis_ticks};
pub use chart::{BarChart, BarChartBuilder, BarGeometry, BarSlot, LimitLine};
pub use geom::{ScreenPoint, ScreenRect};
#[cfg(feature = "gpui")]
pub use gpui_backend::{BarChartView, GpuiTextMeasurer};
pub use labels::select_labels;
pub use legend::{Legend, build_legend};
pub use render::{
    Color, HeuristicTextMeasurer, LineStyle, RectStyle, RenderCommand, RenderList, TextMeasurer,
    TextStyle, build_frame,
};
pub use scale::{height_fraction, max_value, value_fraction};
pub use series::{DataPoint, TRAILING_HEADROOM, prepare, series_max};
pub use style::{BarChartStyle, StyleError, StyleProfile, Theme, resolve_style};
