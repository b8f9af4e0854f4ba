//! Screen-space geometry used by the chart layout.
//!
//! All coordinates are logical pixels with the origin at the top-left and Y
//! growing downwards.

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub const fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from its top-left corner and size.
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(
            ScreenPoint::new(x, y),
            ScreenPoint::new(x + width.max(0.0), y + height.max(0.0)),
        )
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Split off a strip of `width` pixels from the left.
    ///
    /// Returns `(strip, rest)`. The strip never extends past `max.x`.
    pub fn split_left(&self, width: f32) -> (Self, Self) {
        let cut = (self.min.x + width.max(0.0)).min(self.max.x);
        (
            Self::new(self.min, ScreenPoint::new(cut, self.max.y)),
            Self::new(ScreenPoint::new(cut, self.min.y), self.max),
        )
    }
}
