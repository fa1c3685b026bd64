//! Debug-visualization gizmos for RedLilium Engine.
//!
//! Draws points, boxes, spheres, lines, arrows, cylinders, cones and text
//! labels by reusing a pool of renderable objects owned by a host scene.
//! Nothing is destroyed during normal use: handles are acquired, shown for
//! one frame, hidden and returned to the pool.
//!
//! # Architecture
//!
//! - [`GizmoHost`] - Port to the host scene (create/show/hide/style objects)
//! - [`Gizmos`] - Activation controller, global style, draw entry points and tick
//! - [`GizmoObject`] - Persistent drawable re-rendered every tick while enabled
//! - [`ResourcePool`] - Per-kind free lists of host objects
//! - [`VisibilityBuffer`] - Show/hide with deferred hiding for text containers
//! - [`HeadlessHost`] - Recording host for tests and tooling
//!
//! # Usage
//!
//! ```
//! use redlilium_gizmo::{GizmoConfig, Gizmos, HeadlessHost, SphereShape};
//! use redlilium_core::math::Vec3;
//!
//! let mut gizmos = Gizmos::new(HeadlessHost::new(), GizmoConfig::default())?;
//! gizmos.enable();
//!
//! // One-shot draws last a single frame.
//! gizmos.draw_point(Vec3::new(0.0, 1.0, 0.0))?;
//! gizmos.draw_text(Vec3::zeros(), "fps: {}", &[&60])?;
//!
//! // Persistent objects keep drawing while enabled.
//! let marker = gizmos.create(SphereShape { center: Vec3::zeros(), radius: 2.0 });
//! marker.enable();
//!
//! // Each host frame:
//! gizmos.tick()?;
//! assert_eq!(gizmos.in_flight().len(), 4);
//! # Ok::<(), redlilium_gizmo::GizmoError>(())
//! ```

mod config;
mod draw_api;
mod error;
mod gizmos;
mod headless;
mod host;
mod kind;
mod object;
mod pool;
mod primitives;
mod queue;
mod render;
mod scheduler;
mod shared;
mod style;
mod visibility;

pub use config::{GizmoConfig, RenderConfig, VisibilityConfig};
pub use error::GizmoError;
pub use gizmos::{GizmoStats, Gizmos};
pub use headless::{HeadlessHost, HeadlessObject};
pub use host::{Appearance, Geometry, GizmoHost, HostRef, SceneRefs};
pub use kind::{Handle, ResourceKind};
pub use object::{GizmoObject, ObjectId};
pub use pool::ResourcePool;
pub use primitives::{
    format_text, measure_text, ArrowShape, BoxShape, ConeShape, CylinderShape, LineShape,
    PointShape, Primitive, RayShape, ShapeKind, SphereShape, TextShape, WireBoxShape,
    WireSphereShape,
};
pub use queue::RenderQueue;
pub use render::RenderContext;
pub use scheduler::FrameScheduler;
pub use style::{resolve_style, Color3, Style, StyleOverride};
pub use visibility::VisibilityBuffer;

/// Gizmo library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
