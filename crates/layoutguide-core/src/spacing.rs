//! Detection of evenly spaced neighbors near the pointer.

use crate::component::ComponentDescriptor;
use crate::config::GuidanceConfig;
use crate::geometry::{Axis, BoundsExt};
use kurbo::Point;
use serde::Serialize;

/// A gap between two aligned neighbors, and where the next element would go
/// to repeat it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpacingPattern {
    /// Direction the gap runs: horizontal gaps are measured along X.
    pub axis: Axis,
    pub spacing: f64,
    pub between_ids: [String; 2],
    pub suggested_position: Point,
}

/// Find spacing rhythms among the components nearest the pointer.
///
/// Eligible components are ordered by center distance to the pointer and
/// each adjacent pair `(current, next)` is checked for a horizontal and a
/// vertical rhythm independently.
pub fn detect(
    components: &[ComponentDescriptor],
    pointer: Point,
    excluded: Option<&str>,
    config: &GuidanceConfig,
) -> Vec<SpacingPattern> {
    let mut nearby: Vec<(f64, &ComponentDescriptor)> = components
        .iter()
        .filter(|c| !c.is_excluded(excluded) && !c.bounds.is_degenerate())
        .map(|c| (c.bounds.center().distance(pointer), c))
        .filter(|(distance, _)| !distance.is_nan())
        .filter(|(distance, _)| match config.spacing_search_radius {
            Some(radius) => *distance < radius,
            None => true,
        })
        .collect();
    nearby.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut patterns = Vec::new();
    for pair in nearby.windows(2) {
        let (current, next) = (pair[0].1, pair[1].1);
        if let Some(pattern) = horizontal_rhythm(current, next, config) {
            patterns.push(pattern);
        }
        if let Some(pattern) = vertical_rhythm(current, next, config) {
            patterns.push(pattern);
        }
    }
    patterns
}

fn horizontal_rhythm(
    current: &ComponentDescriptor,
    next: &ComponentDescriptor,
    config: &GuidanceConfig,
) -> Option<SpacingPattern> {
    let (a, b) = (&current.bounds, &next.bounds);
    if !((a.center_y() - b.center_y()).abs() < config.alignment_tolerance) {
        return None;
    }
    let gap = b.left() - a.right();
    accepts_gap(gap, config).then(|| SpacingPattern {
        axis: Axis::Horizontal,
        spacing: gap,
        between_ids: [current.id.clone(), next.id.clone()],
        suggested_position: Point::new(a.right() + gap, a.center_y()),
    })
}

fn vertical_rhythm(
    current: &ComponentDescriptor,
    next: &ComponentDescriptor,
    config: &GuidanceConfig,
) -> Option<SpacingPattern> {
    let (a, b) = (&current.bounds, &next.bounds);
    if !((a.center_x() - b.center_x()).abs() < config.alignment_tolerance) {
        return None;
    }
    let gap = b.top() - a.bottom();
    accepts_gap(gap, config).then(|| SpacingPattern {
        axis: Axis::Vertical,
        spacing: gap,
        between_ids: [current.id.clone(), next.id.clone()],
        suggested_position: Point::new(a.center_x(), a.bottom() + gap),
    })
}

/// Both bounds are exclusive.
fn accepts_gap(gap: f64, config: &GuidanceConfig) -> bool {
    gap > config.min_spacing && gap < config.spacing_detection
}
