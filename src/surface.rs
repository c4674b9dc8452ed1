//! The drawing surface the show paints on.

use crate::color::{Hsla, Rgba};
use crate::geometry::Point;

/// Compositing operation applied by subsequent drawing calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Erase the destination toward transparent by the source alpha.
    DestinationOut,
    /// Add source to destination; overlaps brighten toward white.
    #[default]
    Lighter,
}

/// Axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A 2D surface with path stroking and blended rectangle fills.
///
/// Coordinates are canvas units with the origin at the top-left corner and
/// y growing downward.
pub trait Surface {
    /// Width and height in canvas units.
    fn dimensions(&self) -> (f64, f64);
    fn set_blend(&mut self, mode: BlendMode);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn stroke_line(&mut self, from: Point, to: Point, color: Hsla);
    /// Stroke (no fill) a full circle.
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Hsla);
}
