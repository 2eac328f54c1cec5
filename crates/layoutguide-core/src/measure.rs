//! Gap annotations between the drag ghost and its nearest neighbors.

use crate::component::ComponentDescriptor;
use crate::config::GuidanceConfig;
use crate::geometry::{Axis, BoundingBox, BoundsExt};
use kurbo::Point;
use serde::Serialize;

/// A gap line for the renderer to draw, with its label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMeasurement {
    /// Direction the measured line runs.
    pub axis: Axis,
    pub distance: f64,
    pub start: Point,
    pub end: Point,
    pub label: String,
}

/// Which side of the ghost a neighbor sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
    Above,
    Below,
}

const SIDES: [Side; 4] = [Side::Left, Side::Right, Side::Above, Side::Below];

impl Side {
    fn axis(self) -> Axis {
        match self {
            Side::Left | Side::Right => Axis::Horizontal,
            Side::Above | Side::Below => Axis::Vertical,
        }
    }

    /// Gap from the ghost to `other` on this side, plus the line endpoints.
    fn gap(self, ghost: &BoundingBox, other: &BoundingBox, pointer: Point) -> (f64, Point, Point) {
        match self {
            Side::Left => (
                ghost.left() - other.right(),
                Point::new(other.right(), pointer.y),
                Point::new(ghost.left(), pointer.y),
            ),
            Side::Right => (
                other.left() - ghost.right(),
                Point::new(ghost.right(), pointer.y),
                Point::new(other.left(), pointer.y),
            ),
            Side::Above => (
                ghost.top() - other.bottom(),
                Point::new(pointer.x, other.bottom()),
                Point::new(pointer.x, ghost.top()),
            ),
            Side::Below => (
                other.top() - ghost.bottom(),
                Point::new(pointer.x, ghost.bottom()),
                Point::new(pointer.x, other.top()),
            ),
        }
    }

    /// Whether `other` lies in the band this side measures across.
    fn in_band(self, other: &BoundingBox, pointer: Point, band: f64) -> bool {
        match self.axis() {
            Axis::Horizontal => (other.center_y() - pointer.y).abs() < band,
            Axis::Vertical => (other.center_x() - pointer.x).abs() < band,
        }
    }
}

/// Measure gaps from the ghost (centered on `pointer`) to the nearest
/// neighbor on each side.
///
/// A neighbor counts for the left/right sides when its center is within
/// `measurement_band` of the pointer vertically, and for above/below when it
/// is within the band horizontally. Gaps below `measurement_min_distance`
/// (overlapping or touching neighbors) are skipped. Output order is left,
/// right, above, below.
pub fn measure(
    ghost: &BoundingBox,
    components: &[ComponentDescriptor],
    excluded: Option<&str>,
    config: &GuidanceConfig,
) -> Vec<DistanceMeasurement> {
    if ghost.is_degenerate() {
        return Vec::new();
    }
    let pointer = ghost.center();

    let mut nearest: [Option<(f64, Point, Point)>; 4] = [None; 4];
    for component in components {
        if component.is_excluded(excluded) || component.bounds.is_degenerate() {
            continue;
        }
        for (slot, side) in nearest.iter_mut().zip(SIDES) {
            if !side.in_band(&component.bounds, pointer, config.measurement_band) {
                continue;
            }
            let (gap, start, end) = side.gap(ghost, &component.bounds, pointer);
            if !(gap >= config.measurement_min_distance) {
                continue;
            }
            // Strict comparison keeps the first of equally near neighbors.
            if slot.is_none_or(|(best, _, _)| gap < best) {
                *slot = Some((gap, start, end));
            }
        }
    }

    nearest
        .into_iter()
        .zip(SIDES)
        .filter_map(|(found, side)| {
            found.map(|(distance, start, end)| DistanceMeasurement {
                axis: side.axis(),
                distance,
                start,
                end,
                label: format!("{}px", distance.round() as i64),
            })
        })
        .collect()
}
