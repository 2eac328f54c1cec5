//! Read-only snapshot types supplied by the hosting editor.

use crate::geometry::BoundingBox;
use crate::viewport::Viewport;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// How a layout container arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Row,
    Column,
    Grid,
    #[default]
    None,
}

/// Pre-resolved layout metadata of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContainerLayout {
    pub mode: LayoutMode,
    /// Number of grid columns. Missing or zero is treated as one column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    /// Number of children currently in the container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_count: Option<u32>,
}

impl ContainerLayout {
    pub fn row(child_count: u32) -> Self {
        Self {
            mode: LayoutMode::Row,
            columns: None,
            child_count: Some(child_count),
        }
    }

    pub fn column(child_count: u32) -> Self {
        Self {
            mode: LayoutMode::Column,
            columns: None,
            child_count: Some(child_count),
        }
    }

    pub fn grid(columns: u32, child_count: u32) -> Self {
        Self {
            mode: LayoutMode::Grid,
            columns: Some(columns),
            child_count: Some(child_count),
        }
    }
}

/// A placed object on the canvas.
///
/// Bounds are canvas-local and already divided by the zoom scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub is_layout_container: bool,
    pub bounds: BoundingBox,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_layout: Option<ContainerLayout>,
}

impl ComponentDescriptor {
    /// Create a plain (non-container) component.
    pub fn new(id: impl Into<String>, bounds: BoundingBox) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind: "element".to_string(),
            is_layout_container: false,
            bounds,
            container_layout: None,
        }
    }

    /// Mark this component as a layout container.
    pub fn with_layout(mut self, layout: ContainerLayout) -> Self {
        self.is_layout_container = true;
        self.container_layout = Some(layout);
        self
    }

    /// True if this component is the one being dragged.
    pub fn is_excluded(&self, excluded: Option<&str>) -> bool {
        excluded == Some(self.id.as_str())
    }
}

/// Everything the engine reads from the editor for one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSnapshot {
    pub components: Vec<ComponentDescriptor>,
    /// Canvas bounds, `(0, 0, width, height)` in canvas units.
    pub canvas: BoundingBox,
    /// Active zoom scale, kept as host metadata only.
    ///
    /// No guidance stage reads it: bounds and the canvas arrive already
    /// divided by the scale (see [`CanvasSnapshot::from_screen`]).
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Advisory grid visibility, passed through to the result.
    #[serde(default)]
    pub grid_visible: bool,
}

fn default_scale() -> f64 {
    1.0
}

impl CanvasSnapshot {
    pub fn new(components: Vec<ComponentDescriptor>, canvas: BoundingBox) -> Self {
        Self {
            components,
            canvas,
            scale: 1.0,
            grid_visible: false,
        }
    }

    /// Build a snapshot from component bounds measured in screen pixels.
    pub fn from_screen(
        mut components: Vec<ComponentDescriptor>,
        screen_size: Size,
        viewport: &Viewport,
    ) -> Self {
        for component in &mut components {
            component.bounds = viewport.screen_rect_to_canvas(component.bounds);
        }
        Self {
            components,
            canvas: viewport.canvas_bounds(screen_size.width, screen_size.height),
            scale: viewport.effective_scale(),
            grid_visible: false,
        }
    }
}

/// Supplies the current canvas snapshot to the orchestrator.
pub trait CanvasSource {
    fn snapshot(&self) -> CanvasSnapshot;
}

impl CanvasSource for CanvasSnapshot {
    fn snapshot(&self) -> CanvasSnapshot {
        self.clone()
    }
}

/// One pointer-move sample during a drag, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub pointer: Point,
    /// Size of the drag ghost, centered on the pointer.
    pub ghost_size: Size,
}

impl PointerSample {
    pub fn new(pointer: Point, ghost_size: Size) -> Self {
        Self { pointer, ghost_size }
    }
}
