//! Drop-target resolution and insertion-slot computation.

use crate::component::{ComponentDescriptor, ContainerLayout, LayoutMode};
use crate::config::GuidanceConfig;
use crate::geometry::{BoundingBox, BoundsExt};
use kurbo::Point;
use serde::Serialize;

/// Kind of insertion slot, matching the container's layout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Row,
    Column,
    Grid,
}

/// Insertion position within a container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DropSlot {
    pub x: f64,
    pub y: f64,
    pub kind: SlotKind,
    /// Insertion index among the container's children (or grid column).
    pub index: usize,
}

/// The container a drop would land in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropTarget {
    pub container_id: String,
    pub bounds: BoundingBox,
    pub is_pointer_inside: bool,
    /// Absent for containers without a slot-based layout.
    pub slot: Option<DropSlot>,
}

/// Pick the container the pointer is over or hovering near.
///
/// A container containing the pointer always beats one that doesn't.
/// Otherwise the nearest center wins, and outside containers only qualify
/// within `hover_distance`.
pub fn resolve(
    components: &[ComponentDescriptor],
    pointer: Point,
    excluded: Option<&str>,
    config: &GuidanceConfig,
) -> Option<DropTarget> {
    let mut best: Option<(bool, f64, &ComponentDescriptor)> = None;

    for component in components {
        if !component.is_layout_container
            || component.is_excluded(excluded)
            || component.bounds.is_degenerate()
        {
            continue;
        }
        let distance = component.bounds.center().distance(pointer);
        if distance.is_nan() {
            continue;
        }
        let inside = component.bounds.strictly_contains(pointer);
        if !inside && !(distance < config.hover_distance) {
            continue;
        }
        let better = match best {
            None => true,
            Some((best_inside, best_distance, _)) => {
                (inside && !best_inside) || (inside == best_inside && distance < best_distance)
            }
        };
        if better {
            best = Some((inside, distance, component));
        }
    }

    let (inside, _, container) = best?;
    log::trace!("Drop target {} (inside: {})", container.id, inside);
    Some(DropTarget {
        container_id: container.id.clone(),
        bounds: container.bounds,
        is_pointer_inside: inside,
        slot: container
            .container_layout
            .as_ref()
            .and_then(|layout| compute_slot(&container.bounds, layout, pointer, config.grid_slot_offset)),
    })
}

/// Insertion slot nearest the pointer for a container layout.
///
/// Depends only on the bounds, the layout metadata and the pointer.
pub fn compute_slot(
    bounds: &BoundingBox,
    layout: &ContainerLayout,
    pointer: Point,
    grid_slot_offset: f64,
) -> Option<DropSlot> {
    let child_count = layout.child_count.unwrap_or(0) as usize;
    match layout.mode {
        LayoutMode::Row => {
            let index = nearest_boundary(bounds.left(), bounds.width(), child_count, pointer.x);
            Some(DropSlot {
                x: boundary(bounds.left(), bounds.width(), child_count, index),
                y: bounds.center_y(),
                kind: SlotKind::Row,
                index,
            })
        }
        LayoutMode::Column => {
            let index = nearest_boundary(bounds.top(), bounds.height(), child_count, pointer.y);
            Some(DropSlot {
                x: bounds.center_x(),
                y: boundary(bounds.top(), bounds.height(), child_count, index),
                kind: SlotKind::Column,
                index,
            })
        }
        LayoutMode::Grid => {
            let columns = layout.columns.unwrap_or(1).max(1) as usize;
            let cell_width = bounds.width() / columns as f64;
            // Nearest cell center is the cell under the pointer; on a shared
            // edge the lower column wins.
            let cell = ((pointer.x - bounds.left()) / cell_width).ceil() - 1.0;
            let index = clamp_index(cell, columns - 1);
            Some(DropSlot {
                x: bounds.left() + (index as f64 + 0.5) * cell_width,
                y: bounds.top() + grid_slot_offset,
                kind: SlotKind::Grid,
                index,
            })
        }
        LayoutMode::None => None,
    }
}

/// Position of insertion boundary `index` when `count` children share `extent`.
///
/// There are `count + 1` boundaries; with no children the only one sits at
/// `start`.
fn boundary(start: f64, extent: f64, count: usize, index: usize) -> f64 {
    if count == 0 {
        return start;
    }
    start + index as f64 * extent / count as f64
}

/// Boundary in `0..=count` closest to `coordinate`. Ties keep the lower index.
fn nearest_boundary(start: f64, extent: f64, count: usize, coordinate: f64) -> usize {
    if count == 0 {
        return 0;
    }
    let step = extent / count as f64;
    clamp_index(((coordinate - start) / step - 0.5).ceil(), count)
}

/// Clamp a fractional index into `0..=last`. NaN maps to 0.
fn clamp_index(value: f64, last: usize) -> usize {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, last as f64) as usize
}
