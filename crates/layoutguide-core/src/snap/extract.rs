//! Snap-point extraction from component and canvas bounds.

use super::OriginKind;
use crate::component::ComponentDescriptor;
use crate::geometry::{Axis, BoundingBox, BoundsExt};

/// The six alignment scalars of a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapPoints {
    pub left: f64,
    pub right: f64,
    pub center_x: f64,
    pub top: f64,
    pub bottom: f64,
    pub center_y: f64,
    /// True if these points describe the canvas.
    pub canvas: bool,
}

/// A single guide coordinate with its orientation and origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapPoint {
    pub axis: Axis,
    pub position: f64,
    pub origin_kind: OriginKind,
}

impl SnapPoints {
    /// Snap points of a component box. Degenerate boxes yield nothing.
    pub fn from_bounds(bounds: &BoundingBox) -> Option<Self> {
        if bounds.is_degenerate() {
            return None;
        }
        Some(Self {
            left: bounds.left(),
            right: bounds.right(),
            center_x: bounds.center_x(),
            top: bounds.top(),
            bottom: bounds.bottom(),
            center_y: bounds.center_y(),
            canvas: false,
        })
    }

    /// Enumerate the points in fixed order: left, right, center X, top,
    /// bottom, center Y.
    pub fn points(&self) -> [SnapPoint; 6] {
        let edge = |kind: OriginKind| if self.canvas { OriginKind::CanvasEdge } else { kind };
        let center = if self.canvas { OriginKind::CanvasCenter } else { OriginKind::Center };
        [
            SnapPoint { axis: Axis::Vertical, position: self.left, origin_kind: edge(OriginKind::EdgeLeft) },
            SnapPoint { axis: Axis::Vertical, position: self.right, origin_kind: edge(OriginKind::EdgeRight) },
            SnapPoint { axis: Axis::Vertical, position: self.center_x, origin_kind: center },
            SnapPoint { axis: Axis::Horizontal, position: self.top, origin_kind: edge(OriginKind::EdgeTop) },
            SnapPoint { axis: Axis::Horizontal, position: self.bottom, origin_kind: edge(OriginKind::EdgeBottom) },
            SnapPoint { axis: Axis::Horizontal, position: self.center_y, origin_kind: center },
        ]
    }
}

/// Snap points of a component, unless it is the dragged one or degenerate.
pub fn extract_component(component: &ComponentDescriptor, excluded: Option<&str>) -> Option<SnapPoints> {
    if component.is_excluded(excluded) {
        return None;
    }
    SnapPoints::from_bounds(&component.bounds)
}

/// Snap points contributed by the canvas bounds.
pub fn extract_canvas(canvas: &BoundingBox) -> Option<SnapPoints> {
    SnapPoints::from_bounds(canvas).map(|points| SnapPoints { canvas: true, ..points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    #[test]
    fn test_points_from_bounds() {
        let points = SnapPoints::from_bounds(&Rect::new(100.0, 50.0, 300.0, 150.0)).unwrap();
        assert_eq!(points.left, 100.0);
        assert_eq!(points.right, 300.0);
        assert_eq!(points.center_x, 200.0);
        assert_eq!(points.top, 50.0);
        assert_eq!(points.bottom, 150.0);
        assert_eq!(points.center_y, 100.0);
    }

    #[test]
    fn test_degenerate_is_skipped() {
        assert!(SnapPoints::from_bounds(&Rect::new(0.0, 0.0, 0.0, 10.0)).is_none());
        assert!(SnapPoints::from_bounds(&Rect::new(0.0, 0.0, 10.0, -5.0)).is_none());
        assert!(SnapPoints::from_bounds(&Rect::new(0.0, f64::NAN, 10.0, 10.0)).is_none());
    }

    #[test]
    fn test_enumeration_order() {
        let points = SnapPoints::from_bounds(&Rect::new(0.0, 0.0, 10.0, 20.0)).unwrap().points();
        let kinds: Vec<_> = points.iter().map(|p| p.origin_kind).collect();
        assert_eq!(
            kinds,
            vec![
                OriginKind::EdgeLeft,
                OriginKind::EdgeRight,
                OriginKind::Center,
                OriginKind::EdgeTop,
                OriginKind::EdgeBottom,
                OriginKind::Center,
            ]
        );
        assert_eq!(points[2].axis, Axis::Vertical);
        assert_eq!(points[5].axis, Axis::Horizontal);
        assert_eq!(points[5].position, 10.0);
    }

    #[test]
    fn test_canvas_points_use_canvas_kinds() {
        let points = extract_canvas(&Rect::new(0.0, 0.0, 1000.0, 800.0)).unwrap().points();
        assert!(points.iter().all(|p| p.origin_kind.is_canvas()));
        assert_eq!(points[2].origin_kind, OriginKind::CanvasCenter);
        assert_eq!(points[2].position, 500.0);
        assert_eq!(points[1].origin_kind, OriginKind::CanvasEdge);
    }

    #[test]
    fn test_excluded_component() {
        let component = ComponentDescriptor::new("dragged", Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(extract_component(&component, Some("dragged")).is_none());
        assert!(extract_component(&component, Some("other")).is_some());
    }
}
