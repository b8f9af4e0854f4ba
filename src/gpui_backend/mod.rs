//! GPUI integration for gpui_barchart.
//!
//! This module provides a GPUI view that lays out a
//! [`BarChart`](crate::chart::BarChart) with the GPUI text system and paints
//! the resulting render list. It adds no chart logic of its own.

mod paint;
mod text;
mod view;

pub use text::GpuiTextMeasurer;
pub use view::BarChartView;
