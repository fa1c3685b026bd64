//! Primitive renderers.
//!
//! Each shape is a small parameter struct implementing [`Primitive`]. A
//! render call acquires every handle the shape needs up front, configures
//! them from the resolved [`Style`] and the parameters, and submits them to
//! the render queue together. Shape math lives here only as far as turning
//! parameters into per-handle [`Geometry`](crate::Geometry).

mod solid;
mod text;
mod wire;

pub use solid::{BoxShape, ConeShape, CylinderShape, PointShape, SphereShape};
pub use text::{format_text, measure_text, TextShape};
pub use wire::{ArrowShape, LineShape, RayShape, WireBoxShape, WireSphereShape};

use std::fmt;

use crate::render::RenderContext;
use crate::style::Style;
use crate::{GizmoError, ResourceKind};

/// Tag naming each drawable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Box,
    WireBox,
    Sphere,
    WireSphere,
    Line,
    Ray,
    Arrow,
    Cylinder,
    Cone,
    Text,
}

impl ShapeKind {
    /// Shape name for logs.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Box => "box",
            ShapeKind::WireBox => "wire box",
            ShapeKind::Sphere => "sphere",
            ShapeKind::WireSphere => "wire sphere",
            ShapeKind::Line => "line",
            ShapeKind::Ray => "ray",
            ShapeKind::Arrow => "arrow",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Cone => "cone",
            ShapeKind::Text => "text",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A drawable shape: its parameters plus the renderer that places them.
pub trait Primitive: Clone + Send + Sync + 'static {
    /// Which shape this is.
    const SHAPE: ShapeKind;

    /// Resource kinds acquired by one draw, in acquisition order.
    const KINDS: &'static [ResourceKind];

    /// Acquire, configure and submit this shape's handles.
    fn render(&self, style: &Style, cx: &mut RenderContext<'_>) -> Result<(), GizmoError>;
}
