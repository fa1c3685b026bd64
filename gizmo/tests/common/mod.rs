//! Common utilities for gizmo integration tests.

#![allow(dead_code)]

use redlilium_core::math::{Transform, Vec3};
use redlilium_gizmo::{
    ArrowShape, BoxShape, ConeShape, CylinderShape, GizmoConfig, GizmoError, Gizmos,
    HeadlessHost, LineShape, PointShape, RayShape, ShapeKind, SphereShape, StyleOverride,
    TextShape, WireBoxShape, WireSphereShape,
};

/// A context over a fresh headless host that is already enabled.
pub fn active_gizmos() -> Gizmos<HeadlessHost> {
    active_gizmos_with(HeadlessHost::new())
}

/// An enabled context over `host`.
pub fn active_gizmos_with(host: HeadlessHost) -> Gizmos<HeadlessHost> {
    let config = GizmoConfig {
        start_active: true,
        ..GizmoConfig::default()
    };
    Gizmos::new(host, config).expect("headless host never fails to set up")
}

/// Route test logs through env_logger; safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Draw one instance of `shape` with default parameters.
pub fn draw_shape(gizmos: &mut Gizmos<HeadlessHost>, shape: ShapeKind) -> Result<(), GizmoError> {
    let t = Transform::identity();
    let one = Vec3::new(1.0, 1.0, 1.0);
    match shape {
        ShapeKind::Point => gizmos.draw(PointShape {
            position: Vec3::zeros(),
        }),
        ShapeKind::Box => gizmos.draw(BoxShape {
            transform: t,
            size: one,
        }),
        ShapeKind::WireBox => gizmos.draw(WireBoxShape {
            transform: t,
            size: one,
        }),
        ShapeKind::Sphere => gizmos.draw(SphereShape {
            center: Vec3::zeros(),
            radius: 1.0,
        }),
        ShapeKind::WireSphere => gizmos.draw(WireSphereShape {
            center: Vec3::zeros(),
            radius: 1.0,
        }),
        ShapeKind::Line => gizmos.draw(LineShape {
            from: Vec3::zeros(),
            to: one,
        }),
        ShapeKind::Ray => gizmos.draw(RayShape {
            origin: Vec3::zeros(),
            direction: Vec3::y(),
        }),
        ShapeKind::Arrow => gizmos.draw(ArrowShape {
            from: Vec3::zeros(),
            to: Vec3::z(),
        }),
        ShapeKind::Cylinder => gizmos.draw(CylinderShape {
            transform: t,
            radius: 0.5,
            length: 2.0,
        }),
        ShapeKind::Cone => gizmos.draw(ConeShape {
            transform: t,
            radius: 0.5,
            length: 1.0,
        }),
        ShapeKind::Text => gizmos.draw_with_style(
            &StyleOverride::new(),
            TextShape::new(Vec3::zeros(), "label"),
        ),
    }
}
