//! # Geometry
//!
//! Percent boxes and pixel boxes, and the conversion between them.
//!
//! Vertical percentages are converted against a fixed reference height, not
//! the live section height. Only horizontal positions change between
//! breakpoints; heights are never reflowed.

use serde::{Deserialize, Serialize};

use super::partition::LINE_EPSILON;

/// An element's position and size as percentages (0-100) of its section.
///
/// Values outside 0-100 are legal: elements may overflow their section.
/// Clamping is an editing concern and never happens during layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PercentBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        PercentBox {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// A box in absolute pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelBox {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Zero, negative or sub-epsilon width or height: both edges collapse
    /// onto a single grid line. Laid out anyway, but flagged.
    pub fn is_degenerate(&self) -> bool {
        self.width <= LINE_EPSILON || self.height <= LINE_EPSILON
    }

    /// Inverse of [`to_pixel_box`]. A zero container dimension yields 0
    /// on that axis instead of dividing by zero.
    pub fn to_percent_box(&self, container_width: f64, container_height: f64) -> PercentBox {
        PercentBox {
            left: ratio(self.left, container_width),
            top: ratio(self.top, container_height),
            width: ratio(self.width, container_width),
            height: ratio(self.height, container_height),
        }
    }
}

fn ratio(px: f64, extent: f64) -> f64 {
    if extent == 0.0 {
        0.0
    } else {
        px / extent * 100.0
    }
}

/// Resolve a percent box against a container of the given pixel size.
pub fn to_pixel_box(b: &PercentBox, container_width: f64, container_height: f64) -> PixelBox {
    PixelBox {
        left: b.left / 100.0 * container_width,
        top: b.top / 100.0 * container_height,
        width: b.width / 100.0 * container_width,
        height: b.height / 100.0 * container_height,
    }
}
