//! Chart styles, style profiles and themes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::render::Color;

/// Errors raised when loading or validating a [`BarChartStyle`].
#[derive(Debug, Error)]
pub enum StyleError {
    /// Minimum bar height is not a positive finite number.
    #[error("bar_min_height must be a positive finite number, got {0}")]
    InvalidBarMinHeight(f32),
    /// Axis padding is negative or not finite.
    #[error("axis_leading_padding must be a non-negative finite number, got {0}")]
    InvalidAxisPadding(f32),
    /// Fixed scale ceiling is negative or not finite.
    #[error("max_y must be a non-negative finite number, got {0}")]
    InvalidMaxY(f64),
    /// Label cap of zero while labels are shown.
    #[error("label_count must be at least 1 when labels are shown; use show_labels = false to hide them")]
    InvalidLabelCount,
    /// Zero axis ticks while the axis is shown.
    #[error("axis_tick_count must be at least 1 when the axis is shown; use show_axis = false to hide it")]
    InvalidAxisTickCount,
    /// Unknown profile name.
    #[error("unknown style profile `{0}`")]
    UnknownProfile(String),
    /// Malformed style document.
    #[error("failed to parse style: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Named default sets for different display sizes.
///
/// Profiles are chosen by the caller; nothing is inferred from the build
/// target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleProfile {
    /// Regular windows and panels.
    #[default]
    Standard,
    /// Small or constrained surfaces.
    Compact,
}

impl StyleProfile {
    /// Default style for this profile.
    pub fn style(self) -> BarChartStyle {
        let bar_min_height = match self {
            Self::Standard => 100.0,
            Self::Compact => 50.0,
        };
        BarChartStyle {
            bar_min_height,
            show_axis: true,
            axis_leading_padding: 0.0,
            show_labels: true,
            label_count: None,
            show_legends: true,
            max_y: None,
            axis_tick_count: 3,
        }
    }
}

impl FromStr for StyleProfile {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "compact" => Ok(Self::Compact),
            other => Err(StyleError::UnknownProfile(other.to_string())),
        }
    }
}

/// Rendering options for a bar chart.
///
/// Values are immutable; the `with_*` setters return an updated copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BarChartStyle {
    /// Minimum height of the plot area in pixels.
    pub bar_min_height: f32,
    /// Draw the value axis.
    pub show_axis: bool,
    /// Gap between the value axis and the first bar in pixels.
    pub axis_leading_padding: f32,
    /// Draw category labels below the bars.
    pub show_labels: bool,
    /// Upper bound on the number of category labels. `None` labels every bar.
    pub label_count: Option<usize>,
    /// Draw the legend row.
    pub show_legends: bool,
    /// Fixed scale ceiling. `None` derives it from the data.
    pub max_y: Option<f64>,
    /// Number of ticks on the value axis, baseline included.
    pub axis_tick_count: usize,
}

impl Default for BarChartStyle {
    fn default() -> Self {
        StyleProfile::Standard.style()
    }
}

impl BarChartStyle {
    /// Default style for `profile`.
    pub fn for_profile(profile: StyleProfile) -> Self {
        profile.style()
    }

    /// Set the minimum plot height.
    pub fn with_bar_min_height(mut self, height: f32) -> Self {
        self.bar_min_height = height;
        self
    }

    /// Show or hide the value axis.
    pub fn with_axis(mut self, show: bool) -> Self {
        self.show_axis = show;
        self
    }

    /// Set the gap between axis and bars.
    pub fn with_axis_leading_padding(mut self, padding: f32) -> Self {
        self.axis_leading_padding = padding;
        self
    }

    /// Show or hide category labels.
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Cap the number of category labels.
    pub fn with_label_count(mut self, count: Option<usize>) -> Self {
        self.label_count = count;
        self
    }

    /// Show or hide the legend row.
    pub fn with_legends(mut self, show: bool) -> Self {
        self.show_legends = show;
        self
    }

    /// Fix the scale ceiling.
    pub fn with_max_y(mut self, max_y: Option<f64>) -> Self {
        self.max_y = max_y;
        self
    }

    /// Set the number of value axis ticks.
    pub fn with_axis_tick_count(mut self, count: usize) -> Self {
        self.axis_tick_count = count;
        self
    }

    /// Check that numeric options are in range.
    ///
    /// A shown axis needs at least one tick and shown labels need a cap of at
    /// least one; hide them with the `show_*` flags instead.
    pub fn validate(&self) -> Result<(), StyleError> {
        if !(self.bar_min_height.is_finite() && self.bar_min_height > 0.0) {
            return Err(StyleError::InvalidBarMinHeight(self.bar_min_height));
        }
        if !(self.axis_leading_padding.is_finite() && self.axis_leading_padding >= 0.0) {
            return Err(StyleError::InvalidAxisPadding(self.axis_leading_padding));
        }
        if let Some(max_y) = self.max_y
            && !(max_y.is_finite() && max_y >= 0.0)
        {
            return Err(StyleError::InvalidMaxY(max_y));
        }
        if self.show_labels && self.label_count == Some(0) {
            return Err(StyleError::InvalidLabelCount);
        }
        if self.show_axis && self.axis_tick_count == 0 {
            return Err(StyleError::InvalidAxisTickCount);
        }
        Ok(())
    }

    /// Load a style from JSON.
    ///
    /// Fields missing from the document take the defaults of the profile
    /// named by an optional `"profile"` key (standard when absent). The
    /// loaded style is validated.
    pub fn from_json(text: &str) -> Result<Self, StyleError> {
        let mut document: serde_json::Map<String, Value> = serde_json::from_str(text)?;
        let profile = match document.remove("profile") {
            Some(Value::String(name)) => name.parse()?,
            Some(other) => return Err(StyleError::UnknownProfile(other.to_string())),
            None => StyleProfile::default(),
        };
        let mut merged = serde_json::to_value(profile.style())?;
        if let Value::Object(base) = &mut merged {
            base.extend(document);
        }
        let style: Self = serde_json::from_value(merged)?;
        if let Err(err) = style.validate() {
            tracing::warn!(error = %err, "rejected bar chart style");
            return Err(err);
        }
        tracing::debug!(?profile, ?style, "loaded bar chart style");
        Ok(style)
    }
}

/// Pick the style to render with.
///
/// Returns `style` when supplied, otherwise the default for `profile`.
pub fn resolve_style(style: Option<BarChartStyle>, profile: StyleProfile) -> BarChartStyle {
    match style {
        Some(style) => style,
        None => {
            tracing::debug!(?profile, "using profile default bar chart style");
            profile.style()
        }
    }
}

/// Colors and text sizes used by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Background fill.
    pub background: Color,
    /// Axis line color.
    pub axis: Color,
    /// Axis tick and category label color.
    pub text: Color,
    /// Legend label color.
    pub legend_text: Color,
    /// Font size in pixels.
    pub text_size: f32,
}

impl Theme {
    /// Dark text on a light background.
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            axis: Color::new(0.75, 0.75, 0.78, 1.0),
            text: Color::new(0.45, 0.45, 0.48, 1.0),
            legend_text: Color::new(0.15, 0.15, 0.17, 1.0),
            text_size: 12.0,
        }
    }

    /// Light text on a dark background.
    pub fn dark() -> Self {
        Self {
            background: Color::new(0.08, 0.08, 0.09, 1.0),
            axis: Color::new(0.3, 0.3, 0.33, 1.0),
            text: Color::new(0.65, 0.65, 0.7, 1.0),
            legend_text: Color::new(0.9, 0.9, 0.92, 1.0),
            text_size: 12.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
