//! One full guidance pass over a canvas snapshot.

use crate::align::{self, AlignmentSuggestion};
use crate::component::{CanvasSnapshot, PointerSample};
use crate::config::GuidanceConfig;
use crate::drop_target::{self, DropTarget};
use crate::geometry::ghost_bounds;
use crate::measure::{self, DistanceMeasurement};
use crate::snap::{self, MagneticSnap, SnapCandidate};
use crate::spacing::{self, SpacingPattern};
use serde::Serialize;

/// Everything the renderer needs for one frame of drag feedback.
///
/// A new value is built on every pass; results are never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GuidanceResult {
    pub snap_candidates: Vec<SnapCandidate>,
    pub magnetic_snap: Option<MagneticSnap>,
    pub spacing_patterns: Vec<SpacingPattern>,
    pub distance_measurements: Vec<DistanceMeasurement>,
    pub drop_target: Option<DropTarget>,
    pub alignment_suggestions: Vec<AlignmentSuggestion>,
    /// Advisory grid visibility copied from the snapshot.
    pub grid_visible: bool,
}

impl GuidanceResult {
    /// The empty result published when no drag is active.
    pub fn cleared() -> Self {
        Self::default()
    }

    /// True if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.snap_candidates.is_empty()
            && self.magnetic_snap.is_none()
            && self.spacing_patterns.is_empty()
            && self.distance_measurements.is_empty()
            && self.drop_target.is_none()
            && self.alignment_suggestions.is_empty()
    }
}

/// Run every guidance stage for one pointer sample.
///
/// Pure: the output depends only on the arguments.
pub fn compute_guidance(
    snapshot: &CanvasSnapshot,
    sample: &PointerSample,
    excluded: Option<&str>,
    config: &GuidanceConfig,
) -> GuidanceResult {
    let components = snapshot.components.as_slice();
    let pointer = sample.pointer;

    let canvas_points = snap::extract_canvas(&snapshot.canvas);
    let snap_candidates = snap::rank(
        components,
        canvas_points.as_ref(),
        pointer,
        excluded,
        config.snap_threshold,
    );
    let magnetic_snap = snap::evaluate(&snap_candidates, config.magnetic_threshold);
    let spacing_patterns = spacing::detect(components, pointer, excluded, config);
    let ghost = ghost_bounds(pointer, sample.ghost_size);
    let distance_measurements = measure::measure(&ghost, components, excluded, config);
    let drop_target = drop_target::resolve(components, pointer, excluded, config);
    let alignment_suggestions = align::group(components, pointer, excluded, config);

    log::trace!(
        "Guidance at ({:.1}, {:.1}): {} candidates, {} patterns, {} measurements, {} groups",
        pointer.x,
        pointer.y,
        snap_candidates.len(),
        spacing_patterns.len(),
        distance_measurements.len(),
        alignment_suggestions.len(),
    );

    GuidanceResult {
        snap_candidates,
        magnetic_snap,
        spacing_patterns,
        distance_measurements,
        drop_target,
        alignment_suggestions,
        grid_visible: snapshot.grid_visible,
    }
}
