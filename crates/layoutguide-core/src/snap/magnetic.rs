//! Magnetic pull toward the strongest nearby guide.

use super::rank::SnapCandidate;
use crate::geometry::Axis;
use serde::Serialize;

/// Pull toward a single guide, strongest at distance zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MagneticSnap {
    pub axis: Axis,
    pub position: f64,
    /// In `(0, 1]`, decreasing linearly with distance.
    pub strength: f64,
    pub source_id: String,
}

/// Magnetic snap for the top-ranked candidate, if it lies inside the
/// magnetic radius. Only the first candidate is considered.
pub fn evaluate(ranked: &[SnapCandidate], magnetic_threshold: f64) -> Option<MagneticSnap> {
    let top = ranked.first()?;
    if !(magnetic_threshold.is_finite() && magnetic_threshold > 0.0) {
        return None;
    }
    if !(top.distance < magnetic_threshold) {
        return None;
    }
    Some(MagneticSnap {
        axis: top.axis,
        position: top.position,
        strength: 1.0 - top.distance / magnetic_threshold,
        source_id: top.source_id.clone(),
    })
}
