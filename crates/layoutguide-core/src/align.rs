//! Grouping of nearby components that share a center line.

use crate::component::ComponentDescriptor;
use crate::config::GuidanceConfig;
use crate::geometry::{Axis, BoundsExt};
use kurbo::Point;
use serde::Serialize;
use std::collections::BTreeMap;

/// Components whose centers line up on one guide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentSuggestion {
    /// Guide orientation: members sharing a center X line up vertically.
    pub axis: Axis,
    pub position: f64,
    pub member_ids: Vec<String>,
}

/// Group components near the pointer by quantized center coordinate.
///
/// Vertical groups come first, then horizontal; each in ascending position.
pub fn group(
    components: &[ComponentDescriptor],
    pointer: Point,
    excluded: Option<&str>,
    config: &GuidanceConfig,
) -> Vec<AlignmentSuggestion> {
    let quantum = config.align_quantum;
    if !(quantum.is_finite() && quantum > 0.0) {
        return Vec::new();
    }

    let mut by_x: BTreeMap<i64, Vec<String>> = BTreeMap::new();
    let mut by_y: BTreeMap<i64, Vec<String>> = BTreeMap::new();
    for component in components {
        if component.is_excluded(excluded) || component.bounds.is_degenerate() {
            continue;
        }
        let center = component.bounds.center();
        if !(center.distance(pointer) < config.smart_align_threshold) {
            continue;
        }
        by_x.entry(quantize(center.x, quantum)).or_default().push(component.id.clone());
        by_y.entry(quantize(center.y, quantum)).or_default().push(component.id.clone());
    }

    let groups = by_x
        .into_iter()
        .map(|(key, members)| (Axis::Vertical, key, members))
        .chain(by_y.into_iter().map(|(key, members)| (Axis::Horizontal, key, members)));
    groups
        .filter(|(_, _, members)| members.len() >= 2)
        .map(|(axis, key, member_ids)| AlignmentSuggestion {
            axis,
            position: key as f64 * quantum,
            member_ids,
        })
        .collect()
}

fn quantize(value: f64, quantum: f64) -> i64 {
    (value / quantum).round() as i64
}
