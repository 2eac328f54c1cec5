//! Viewport transform between screen pixels and canvas units.

use kurbo::{Affine, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Pan/zoom state of the canvas as seen by the host.
///
/// Guidance runs entirely in canvas units. Hosts use the viewport to divide
/// raw screen measurements by the active scale factor before building a
/// snapshot or a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Screen-space position of the canvas origin.
    pub offset: Vec2,
    /// Active scale factor (1.0 = 100%).
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl Viewport {
    /// Create a viewport with the given offset and scale.
    pub fn new(offset: Vec2, scale: f64) -> Self {
        Self { offset, scale }
    }

    /// Scale factor usable as a divisor. Falls back to 1.0 for zero,
    /// negative or non-finite scales.
    pub fn effective_scale(&self) -> f64 {
        if self.scale.is_finite() && self.scale > 0.0 {
            self.scale
        } else {
            1.0
        }
    }

    /// Canvas units to screen pixels.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.effective_scale())
    }

    /// Screen pixels to canvas units.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.effective_scale()) * Affine::translate(-self.offset)
    }

    pub fn screen_to_canvas(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    pub fn canvas_to_screen(&self, canvas_point: Point) -> Point {
        self.transform() * canvas_point
    }

    /// Normalize a screen-space rectangle into canvas units.
    pub fn screen_rect_to_canvas(&self, screen_rect: Rect) -> Rect {
        self.inverse_transform().transform_rect_bbox(screen_rect)
    }

    /// Canvas-space bounds of a screen-sized viewport, anchored at the origin.
    ///
    /// This is the `(0, 0, width, height)` box the canvas contributes snap
    /// points from.
    pub fn canvas_bounds(&self, screen_width: f64, screen_height: f64) -> Rect {
        let scale = self.effective_scale();
        Rect::new(0.0, 0.0, screen_width / scale, screen_height / scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_viewport() {
        let viewport = Viewport::default();
        let screen = Point::new(100.0, 200.0);
        let canvas = viewport.screen_to_canvas(screen);
        assert!((canvas.x - screen.x).abs() < f64::EPSILON);
        assert!((canvas.y - screen.y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_normalization() {
        let viewport = Viewport::new(Vec2::ZERO, 2.0);
        let canvas = viewport.screen_to_canvas(Point::new(100.0, 200.0));
        assert!((canvas.x - 50.0).abs() < f64::EPSILON);
        assert!((canvas.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_offset_and_zoom() {
        let viewport = Viewport::new(Vec2::new(20.0, 40.0), 2.0);
        let canvas = viewport.screen_to_canvas(Point::new(120.0, 240.0));
        assert!((canvas.x - 50.0).abs() < 1e-10);
        assert!((canvas.y - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_roundtrip() {
        let viewport = Viewport::new(Vec2::new(30.0, -20.0), 1.5);
        let original = Point::new(123.0, 456.0);
        let back = viewport.canvas_to_screen(viewport.screen_to_canvas(original));
        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }

    #[test]
    fn test_screen_rect_to_canvas() {
        let viewport = Viewport::new(Vec2::ZERO, 2.0);
        let rect = viewport.screen_rect_to_canvas(Rect::new(200.0, 100.0, 600.0, 300.0));
        assert!((rect.x0 - 100.0).abs() < 1e-10);
        assert!((rect.y0 - 50.0).abs() < 1e-10);
        assert!((rect.x1 - 300.0).abs() < 1e-10);
        assert!((rect.y1 - 150.0).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_scale_falls_back() {
        assert_eq!(Viewport::new(Vec2::ZERO, 0.0).effective_scale(), 1.0);
        assert_eq!(Viewport::new(Vec2::ZERO, -3.0).effective_scale(), 1.0);
        assert_eq!(Viewport::new(Vec2::ZERO, f64::NAN).effective_scale(), 1.0);
        let bounds = Viewport::new(Vec2::ZERO, 0.0).canvas_bounds(1000.0, 800.0);
        assert_eq!(bounds, Rect::new(0.0, 0.0, 1000.0, 800.0));
    }

    #[test]
    fn test_canvas_bounds_scaled() {
        let bounds = Viewport::new(Vec2::ZERO, 2.0).canvas_bounds(1000.0, 800.0);
        assert_eq!(bounds, Rect::new(0.0, 0.0, 500.0, 400.0));
    }
}
