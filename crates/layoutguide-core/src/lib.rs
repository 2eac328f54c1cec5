//! LayoutGuide Core Library
//!
//! Spatial layout guidance for drag-and-drop canvas editors: alignment
//! guides, magnetic snapping, spacing rhythms, gap measurements, drop
//! targets and alignment suggestions, recomputed per pointer move.
//!
//! [`compute_guidance`] is a pure function of a [`CanvasSnapshot`] and a
//! [`PointerSample`]; [`GuidanceOrchestrator`] adds the drag lifecycle and
//! throttling on top of it.

pub mod align;
pub mod component;
pub mod config;
pub mod drop_target;
pub mod error;
pub mod geometry;
pub mod guidance;
pub mod measure;
pub mod orchestrator;
pub mod snap;
pub mod spacing;
pub mod viewport;

pub use align::AlignmentSuggestion;
pub use component::{CanvasSnapshot, CanvasSource, ComponentDescriptor, ContainerLayout, LayoutMode, PointerSample};
pub use config::GuidanceConfig;
pub use drop_target::{DropSlot, DropTarget, SlotKind};
pub use error::{GuidanceError, Result};
pub use geometry::{Axis, BoundingBox, BoundsExt, ghost_bounds};
pub use guidance::{GuidanceResult, compute_guidance};
pub use measure::DistanceMeasurement;
pub use orchestrator::{GuidanceOrchestrator, GuidancePhase};
pub use snap::{MagneticSnap, OriginKind, SnapCandidate};
pub use spacing::SpacingPattern;
pub use viewport::Viewport;
