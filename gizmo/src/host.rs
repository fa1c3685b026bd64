//! Port between the gizmo engine and the host scene graph.
//!
//! The engine never touches host objects directly. It asks the host to
//! create renderables for [`Handle`]s, toggles their visibility, and pushes
//! [`Appearance`] and [`Geometry`] updates. How those map onto real scene
//! objects is entirely the adapter's concern.

use redlilium_core::math::{Transform, Vec2, Vec3};

use crate::style::{Color3, Style};
use crate::{GizmoError, Handle, ResourceKind};

/// Opaque reference to a host-owned object that is not pooled
/// (the private container and the shared anchor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostRef(pub u64);

/// Host objects shared by every pooled renderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneRefs {
    /// Parent of every pooled renderable.
    pub container: HostRef,
    /// Inert spatial reference for overlays. Using the scene root instead
    /// makes some hosts drift overlays toward the origin.
    pub anchor: HostRef,
}

/// Visual fields copied from the resolved [`Style`] onto each renderable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub color: Color3,
    pub transparency: f32,
    pub always_on_top: bool,
    pub layer: i32,
}

impl From<&Style> for Appearance {
    fn from(style: &Style) -> Self {
        Self {
            color: style.color,
            transparency: style.transparency,
            always_on_top: style.always_on_top,
            layer: style.layer,
        }
    }
}

/// Placement of a single renderable, one variant per [`ResourceKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Sphere {
        center: Vec3,
        radius: f32,
    },
    Box {
        transform: Transform,
        size: Vec3,
    },
    Line {
        from: Vec3,
        to: Vec3,
        thickness: f32,
    },
    Ring {
        center: Vec3,
        /// Unit normal of the ring plane.
        normal: Vec3,
        radius: f32,
        thickness: f32,
    },
    /// Cylinder along the local Y axis of `transform`.
    Cylinder {
        transform: Transform,
        radius: f32,
        length: f32,
    },
    /// Cone from the center of its base to its tip.
    Cone {
        base: Vec3,
        tip: Vec3,
        radius: f32,
    },
    TextContainer {
        position: Vec3,
        /// Width and height in screen pixels.
        size: Vec2,
    },
    TextLabel {
        /// Container this label is placed in.
        container: Handle,
        text: String,
    },
}

impl Geometry {
    /// The resource kind able to display this geometry.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Geometry::Sphere { .. } => ResourceKind::Sphere,
            Geometry::Box { .. } => ResourceKind::Box,
            Geometry::Line { .. } => ResourceKind::Line,
            Geometry::Ring { .. } => ResourceKind::Ring,
            Geometry::Cylinder { .. } => ResourceKind::Cylinder,
            Geometry::Cone { .. } => ResourceKind::Cone,
            Geometry::TextContainer { .. } => ResourceKind::TextContainer,
            Geometry::TextLabel { .. } => ResourceKind::TextLabel,
        }
    }
}

/// Host scene-graph adapter.
///
/// Implementations are driven from a single thread; the engine calls these
/// methods synchronously from draw calls and from [`Gizmos::tick`](crate::Gizmos::tick).
pub trait GizmoHost {
    /// Find the container tagged `tag`, creating it if missing.
    ///
    /// Must be idempotent so that a reloaded library reuses the container
    /// left behind by a previous instance.
    fn ensure_container(&mut self, tag: &str) -> Result<HostRef, GizmoError>;

    /// Find the anchor tagged `tag`, creating it if missing.
    ///
    /// The anchor is zero-sized, fully transparent and excluded from physics.
    fn ensure_anchor(&mut self, tag: &str) -> Result<HostRef, GizmoError>;

    /// Create a hidden renderable of `handle.kind()` under `scene.container`.
    fn create_object(&mut self, handle: Handle, scene: SceneRefs) -> Result<(), GizmoError>;

    /// Show or hide a renderable.
    fn set_visible(&mut self, handle: Handle, visible: bool);

    /// Apply color, transparency, depth mode and layer.
    fn apply_appearance(&mut self, handle: Handle, appearance: &Appearance);

    /// Apply placement and shape parameters.
    fn apply_geometry(&mut self, handle: Handle, geometry: &Geometry);

    /// Current value of the external activation switch, if the host has one.
    fn activation_switch(&self) -> Option<bool> {
        None
    }
}
