//! Shared geometry value types.
//!
//! All coordinates are canvas-local and zoom-normalized: raw screen pixels
//! divided by the active scale factor (see [`crate::viewport::Viewport`]).

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in canvas units.
///
/// `x0`/`x1` are the left/right edges, `y0`/`y1` the top/bottom edges.
pub type BoundingBox = Rect;

/// Orientation of a guide line or measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Coordinate of `point` constrained by a guide line on this axis.
    ///
    /// A vertical guide constrains X, a horizontal guide constrains Y.
    pub fn guide_coordinate(self, point: Point) -> f64 {
        match self {
            Axis::Vertical => point.x,
            Axis::Horizontal => point.y,
        }
    }
}

/// Convenience accessors on [`BoundingBox`] used throughout the engine.
pub trait BoundsExt {
    fn left(&self) -> f64;
    fn right(&self) -> f64;
    fn top(&self) -> f64;
    fn bottom(&self) -> f64;
    fn center_x(&self) -> f64;
    fn center_y(&self) -> f64;

    /// True if any coordinate is non-finite or the box has no positive area.
    ///
    /// Degenerate boxes never produce guidance.
    fn is_degenerate(&self) -> bool;

    /// Strict containment: points on the border are outside.
    fn strictly_contains(&self, point: Point) -> bool;
}

impl BoundsExt for BoundingBox {
    fn left(&self) -> f64 {
        self.x0
    }

    fn right(&self) -> f64 {
        self.x1
    }

    fn top(&self) -> f64 {
        self.y0
    }

    fn bottom(&self) -> f64 {
        self.y1
    }

    fn center_x(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }

    fn center_y(&self) -> f64 {
        (self.y0 + self.y1) / 2.0
    }

    fn is_degenerate(&self) -> bool {
        let finite = self.x0.is_finite()
            && self.x1.is_finite()
            && self.y0.is_finite()
            && self.y1.is_finite();
        // Written so that NaN widths fail the check too.
        !(finite && self.width() > 0.0 && self.height() > 0.0)
    }

    fn strictly_contains(&self, point: Point) -> bool {
        point.x > self.x0 && point.x < self.x1 && point.y > self.y0 && point.y < self.y1
    }
}

/// Bounding box of the drag ghost when centered on `pointer`.
pub fn ghost_bounds(pointer: Point, size: Size) -> BoundingBox {
    Rect::from_center_size(pointer, size)
}
