//! Snap guides: point extraction, candidate ranking and magnetic pull.

mod extract;
mod magnetic;
mod rank;

pub use extract::{SnapPoint, SnapPoints, extract_canvas, extract_component};
pub use magnetic::{MagneticSnap, evaluate};
pub use rank::{SnapCandidate, rank};

use serde::{Deserialize, Serialize};

/// Source id used for guides contributed by the canvas itself.
pub const CANVAS_SOURCE_ID: &str = "canvas";

/// Where a snap point comes from on its source box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OriginKind {
    EdgeLeft,
    EdgeRight,
    EdgeTop,
    EdgeBottom,
    Center,
    CanvasEdge,
    CanvasCenter,
}

impl OriginKind {
    /// Ranking priority. Centers beat edges, components beat the canvas.
    pub fn priority(self) -> u8 {
        match self {
            OriginKind::Center => 2,
            OriginKind::EdgeLeft
            | OriginKind::EdgeRight
            | OriginKind::EdgeTop
            | OriginKind::EdgeBottom => 1,
            OriginKind::CanvasEdge | OriginKind::CanvasCenter => 0,
        }
    }

    /// Whether this origin belongs to the canvas rather than a component.
    pub fn is_canvas(self) -> bool {
        matches!(self, OriginKind::CanvasEdge | OriginKind::CanvasCenter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert!(OriginKind::Center.priority() > OriginKind::EdgeLeft.priority());
        assert!(OriginKind::EdgeBottom.priority() > OriginKind::CanvasCenter.priority());
        assert_eq!(OriginKind::CanvasEdge.priority(), 0);
    }

    #[test]
    fn test_origin_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&OriginKind::EdgeLeft).unwrap();
        assert_eq!(json, "\"edge-left\"");
        let json = serde_json::to_string(&OriginKind::CanvasCenter).unwrap();
        assert_eq!(json, "\"canvas-center\"");
    }
}
