//! Ranking of snap points against the pointer.

use super::extract::{SnapPoints, extract_component};
use super::{CANVAS_SOURCE_ID, OriginKind};
use crate::component::ComponentDescriptor;
use crate::geometry::Axis;
use kurbo::Point;
use serde::Serialize;
use std::cmp::Ordering;

/// A guide the pointer is close enough to align with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapCandidate {
    pub axis: Axis,
    pub position: f64,
    pub origin_kind: OriginKind,
    pub source_id: String,
    pub distance: f64,
    pub priority: u8,
}

/// Collect every snap point within `threshold` of the pointer.
///
/// Components are visited in slice order, then the canvas. Only
/// `distance < threshold` qualifies. The result is stably sorted by priority
/// (descending) then distance (ascending), so equal keys keep their
/// enumeration order.
pub fn rank(
    components: &[ComponentDescriptor],
    canvas_points: Option<&SnapPoints>,
    pointer: Point,
    excluded: Option<&str>,
    threshold: f64,
) -> Vec<SnapCandidate> {
    let mut candidates = Vec::new();

    for component in components {
        if let Some(points) = extract_component(component, excluded) {
            collect(&points, &component.id, pointer, threshold, &mut candidates);
        }
    }
    if let Some(points) = canvas_points {
        collect(points, CANVAS_SOURCE_ID, pointer, threshold, &mut candidates);
    }

    candidates.sort_by(compare);
    candidates
}

fn collect(
    points: &SnapPoints,
    source_id: &str,
    pointer: Point,
    threshold: f64,
    out: &mut Vec<SnapCandidate>,
) {
    for point in points.points() {
        let distance = (point.axis.guide_coordinate(pointer) - point.position).abs();
        // NaN never passes.
        if distance < threshold {
            out.push(SnapCandidate {
                axis: point.axis,
                position: point.position,
                origin_kind: point.origin_kind,
                source_id: source_id.to_string(),
                distance,
                priority: point.origin_kind.priority(),
            });
        }
    }
}

fn compare(a: &SnapCandidate, b: &SnapCandidate) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| a.distance.total_cmp(&b.distance))
}
