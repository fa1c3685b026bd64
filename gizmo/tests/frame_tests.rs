//! Integration tests for the gizmo frame lifecycle.
//!
//! Every test runs against the headless host, which records exactly what a
//! real host would display.

mod common;

use std::collections::HashSet;

use rstest::rstest;

use common::{active_gizmos, active_gizmos_with, draw_shape, init_logging};
use redlilium_core::math::Vec3;
use redlilium_gizmo::{
    ArrowShape, GizmoConfig, GizmoError, Gizmos, HeadlessHost, PointShape, ResourceKind,
    ShapeKind, SphereShape, TextShape, VisibilityConfig,
};

// ============================================================================
// Shapes
// ============================================================================

/// One draw of each shape shows exactly its handle count, then releases
/// all of them on the following tick.
#[rstest]
#[case::point(ShapeKind::Point, 1)]
#[case::solid_box(ShapeKind::Box, 1)]
#[case::wire_box(ShapeKind::WireBox, 12)]
#[case::sphere(ShapeKind::Sphere, 1)]
#[case::wire_sphere(ShapeKind::WireSphere, 3)]
#[case::line(ShapeKind::Line, 1)]
#[case::ray(ShapeKind::Ray, 1)]
#[case::arrow(ShapeKind::Arrow, 2)]
#[case::cylinder(ShapeKind::Cylinder, 1)]
#[case::cone(ShapeKind::Cone, 1)]
#[case::text(ShapeKind::Text, 2)]
fn test_shape_lifecycle(#[case] shape: ShapeKind, #[case] handles: usize) {
    init_logging();
    let mut gizmos = active_gizmos();

    draw_shape(&mut gizmos, shape).unwrap();
    assert_eq!(gizmos.queued().len(), handles, "{shape} queued");

    gizmos.tick().unwrap();
    let shown = gizmos.in_flight().to_vec();
    assert_eq!(shown.len(), handles);
    assert!(shown.iter().all(|&h| gizmos.host().is_visible(h)));

    gizmos.tick().unwrap();
    assert!(shown.iter().all(|&h| gizmos.pool().is_free(h)));
    assert_eq!(gizmos.stats().free, handles);
}

/// Redrawing the same shapes every tick never creates new host objects
/// once the pool has warmed up.
#[rstest]
#[case::wire_box(ShapeKind::WireBox)]
#[case::arrow(ShapeKind::Arrow)]
#[case::text(ShapeKind::Text)]
fn test_steady_state_creates_nothing(#[case] shape: ShapeKind) {
    let mut gizmos = active_gizmos();
    for _ in 0..3 {
        draw_shape(&mut gizmos, shape).unwrap();
        draw_shape(&mut gizmos, shape).unwrap();
        gizmos.tick().unwrap();
    }
    let warmed = gizmos.host().total_created();

    for _ in 0..20 {
        draw_shape(&mut gizmos, shape).unwrap();
        draw_shape(&mut gizmos, shape).unwrap();
        gizmos.tick().unwrap();
    }
    assert_eq!(gizmos.host().total_created(), warmed);
}

// ============================================================================
// Pool
// ============================================================================

#[test]
fn test_handles_are_exclusive_within_a_frame() {
    let mut gizmos = active_gizmos();
    for _ in 0..2 {
        for i in 0..10 {
            gizmos.draw_point(Vec3::new(i as f32, 0.0, 0.0)).unwrap();
        }
        gizmos.tick().unwrap();
        let unique: HashSet<_> = gizmos.in_flight().iter().collect();
        assert_eq!(unique.len(), 10);
        assert!(gizmos.in_flight().iter().all(|&h| !gizmos.pool().is_free(h)));
    }
}

#[test]
fn test_creation_failure_propagates_from_draw() {
    let mut gizmos = active_gizmos_with(HeadlessHost::new().with_creation_limit(1));
    gizmos.draw_point(Vec3::zeros()).unwrap();
    let err = gizmos.draw_point(Vec3::x()).unwrap_err();
    assert!(matches!(
        err,
        GizmoError::ResourceCreationFailed {
            kind: ResourceKind::Sphere,
            ..
        }
    ));

    // The successful draw is unaffected.
    gizmos.tick().unwrap();
    assert_eq!(gizmos.in_flight().len(), 1);
}

// ============================================================================
// Activation
// ============================================================================

#[test]
fn test_inactive_calls_have_no_effect() {
    let mut gizmos = Gizmos::with_defaults(HeadlessHost::new()).unwrap();
    for shape in [ShapeKind::Point, ShapeKind::WireBox, ShapeKind::Text] {
        draw_shape(&mut gizmos, shape).unwrap();
    }
    gizmos.tick().unwrap();
    assert_eq!(gizmos.host().total_created(), 0);
    assert!(gizmos.queued().is_empty());
}

#[test]
fn test_disable_leaves_nothing_visible() {
    let mut gizmos = active_gizmos();
    let persistent = gizmos.create(SphereShape {
        center: Vec3::zeros(),
        radius: 1.0,
    });
    persistent.enable();
    gizmos
        .draw(TextShape::new(Vec3::zeros(), "pending"))
        .unwrap();
    gizmos.tick().unwrap();
    gizmos.draw_point(Vec3::zeros()).unwrap();

    gizmos.disable();
    assert!(gizmos.host().visible_handles().is_empty());
    assert_eq!(gizmos.stats().deferred, 0);

    // Ticks while disabled show nothing, even with the object still enabled.
    gizmos.tick().unwrap();
    assert!(gizmos.host().visible_handles().is_empty());

    gizmos.enable();
    gizmos.tick().unwrap();
    assert_eq!(gizmos.in_flight().len(), 1);
}

#[test]
fn test_activation_switch_drives_lifecycle() {
    let mut gizmos = Gizmos::with_defaults(HeadlessHost::new()).unwrap();
    gizmos.host_mut().set_activation_switch(Some(true));
    gizmos.tick().unwrap();
    assert!(gizmos.is_active());

    gizmos.draw_point(Vec3::zeros()).unwrap();
    gizmos.tick().unwrap();
    assert_eq!(gizmos.host().visible_handles().len(), 1);

    gizmos.host_mut().set_activation_switch(Some(false));
    gizmos.tick().unwrap();
    assert!(!gizmos.is_active());
    assert!(gizmos.host().visible_handles().is_empty());
}

// ============================================================================
// Deferred hide
// ============================================================================

#[test]
fn test_text_container_hide_is_deferred() {
    let mut gizmos = active_gizmos();
    gizmos
        .draw_text(Vec3::zeros(), "hp {}", &[&100])
        .unwrap();

    // Tick 1 shows the label.
    gizmos.tick().unwrap();
    let shown = gizmos.in_flight().to_vec();
    let container = shown
        .iter()
        .copied()
        .find(|h| h.kind() == ResourceKind::TextContainer)
        .unwrap();
    let label = shown
        .iter()
        .copied()
        .find(|h| h.kind() == ResourceKind::TextLabel)
        .unwrap();

    // Tick 2 releases it: the label hides at once, the container lingers.
    gizmos.tick().unwrap();
    assert!(!gizmos.host().is_visible(label));
    assert!(gizmos.host().is_visible(container));
    assert!(gizmos.visibility().is_pending(container));

    // Tick 3 flushes the buffer.
    gizmos.tick().unwrap();
    assert!(!gizmos.host().is_visible(container));
    assert_eq!(gizmos.stats().deferred, 0);
}

#[test]
fn test_text_started_on_odd_tick_gets_full_extra_tick() {
    let mut gizmos = active_gizmos();
    gizmos.tick().unwrap();

    gizmos.draw(TextShape::new(Vec3::zeros(), "late")).unwrap();
    gizmos.tick().unwrap();
    let container = gizmos
        .in_flight()
        .iter()
        .copied()
        .find(|h| h.kind() == ResourceKind::TextContainer)
        .unwrap();

    gizmos.tick().unwrap();
    assert!(gizmos.host().is_visible(container));
    assert_eq!(gizmos.visibility().remaining(container), Some(1));

    gizmos.tick().unwrap();
    assert!(!gizmos.host().is_visible(container));
}

#[test]
fn test_period_one_hides_on_next_process() {
    let config = GizmoConfig {
        start_active: true,
        visibility: VisibilityConfig {
            deferred_hide_period: 1,
        },
        ..GizmoConfig::default()
    };
    let mut gizmos = Gizmos::new(HeadlessHost::new(), config).unwrap();
    gizmos
        .draw(TextShape::new(Vec3::zeros(), "quick"))
        .unwrap();
    gizmos.tick().unwrap();
    gizmos.tick().unwrap();
    assert!(gizmos.host().visible_handles().is_empty());
}

#[test]
fn test_reused_container_is_not_hidden_by_flush() {
    let mut gizmos = active_gizmos();
    for tick in 0..6 {
        gizmos
            .draw_text(Vec3::zeros(), "frame {}", &[&tick])
            .unwrap();
        gizmos.tick().unwrap();
        for &h in gizmos.in_flight() {
            assert!(gizmos.host().is_visible(h), "tick {tick}: {h} hidden");
        }
    }
}

// ============================================================================
// Persistent objects
// ============================================================================

#[test]
fn test_enable_twice_disable_once() {
    let mut gizmos = active_gizmos();
    let obj = gizmos.create(PointShape {
        position: Vec3::zeros(),
    });
    obj.enable();
    obj.enable();
    obj.disable();
    gizmos.tick().unwrap();
    assert!(gizmos.in_flight().is_empty());
}

#[test]
fn test_updated_parameters_render_next_tick() {
    let mut gizmos = active_gizmos();
    let obj = gizmos.create(PointShape {
        position: Vec3::zeros(),
    });
    obj.enable();
    gizmos.tick().unwrap();

    obj.update(PointShape {
        position: Vec3::new(0.0, 7.0, 0.0),
    });
    gizmos.tick().unwrap();
    let handle = gizmos.in_flight()[0];
    match gizmos.host().object(handle).unwrap().geometry.as_ref() {
        Some(redlilium_gizmo::Geometry::Sphere { center, .. }) => {
            assert_eq!(*center, Vec3::new(0.0, 7.0, 0.0))
        }
        other => panic!("unexpected geometry {other:?}"),
    }
}

#[test]
fn test_dropped_object_stops_rendering() {
    let mut gizmos = active_gizmos();
    let obj = gizmos.create(PointShape {
        position: Vec3::zeros(),
    });
    obj.enable();
    gizmos.tick().unwrap();
    assert_eq!(gizmos.in_flight().len(), 1);

    drop(obj);
    gizmos.tick().unwrap();
    assert!(gizmos.in_flight().is_empty());
    assert_eq!(gizmos.stats().enabled_objects, 0);
}

#[test]
fn test_failing_object_does_not_blank_the_frame() {
    init_logging();
    let host = HeadlessHost::new().with_failing_kind(ResourceKind::Cone);
    let mut gizmos = active_gizmos_with(host);
    let sphere = gizmos.create(SphereShape {
        center: Vec3::zeros(),
        radius: 1.0,
    });
    let arrow = gizmos.create(ArrowShape {
        from: Vec3::zeros(),
        to: Vec3::x(),
    });
    sphere.enable();
    arrow.enable();

    for _ in 0..10 {
        gizmos.draw_point(Vec3::y()).unwrap();
        let err = gizmos.tick().unwrap_err();
        assert!(matches!(
            err,
            GizmoError::ResourceCreationFailed {
                kind: ResourceKind::Cone,
                ..
            }
        ));

        // The point and the healthy sphere are still shown.
        assert_eq!(gizmos.in_flight().len(), 2);
        for &h in gizmos.in_flight() {
            assert!(gizmos.host().is_visible(h));
        }
        // Two spheres per frame plus the arrow's restored line, double
        // buffered across the parked frame.
        let stats = gizmos.stats();
        assert_eq!(stats.queued, 0);
        assert!(stats.created <= 4, "pool kept growing: {stats:?}");
    }
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_bad_template_acquires_nothing() {
    let mut gizmos = active_gizmos();
    let err = gizmos
        .draw_text(Vec3::zeros(), "{} and {}", &[&1])
        .unwrap_err();
    assert!(matches!(err, GizmoError::TextFormat(_)));
    assert_eq!(gizmos.host().total_created(), 0);
    assert!(gizmos.queued().is_empty());
}
