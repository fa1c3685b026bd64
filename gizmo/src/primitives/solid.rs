use redlilium_core::math::{transform_point, Transform, Vec3};

use super::{Primitive, ShapeKind};
use crate::host::Geometry;
use crate::render::RenderContext;
use crate::style::Style;
use crate::{GizmoError, ResourceKind};

/// A point marker: a small sphere whose radius follows the style scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointShape {
    pub position: Vec3,
}

impl Primitive for PointShape {
    const SHAPE: ShapeKind = ShapeKind::Point;
    const KINDS: &'static [ResourceKind] = &[ResourceKind::Sphere];

    fn render(&self, style: &Style, cx: &mut RenderContext<'_>) -> Result<(), GizmoError> {
        let [sphere] = cx.acquire([ResourceKind::Sphere])?;
        let radius = cx.config().point_radius * style.scale;
        cx.configure(
            sphere,
            style,
            &Geometry::Sphere {
                center: self.position,
                radius,
            },
        );
        cx.submit(&[sphere]);
        Ok(())
    }
}

/// A solid oriented box with full extents `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    pub transform: Transform,
    pub size: Vec3,
}

impl Primitive for BoxShape {
    const SHAPE: ShapeKind = ShapeKind::Box;
    const KINDS: &'static [ResourceKind] = &[ResourceKind::Box];

    fn render(&self, style: &Style, cx: &mut RenderContext<'_>) -> Result<(), GizmoError> {
        let [handle] = cx.acquire([ResourceKind::Box])?;
        cx.configure(
            handle,
            style,
            &Geometry::Box {
                transform: self.transform,
                size: self.size,
            },
        );
        cx.submit(&[handle]);
        Ok(())
    }
}

/// A solid sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereShape {
    pub center: Vec3,
    pub radius: f32,
}

impl Primitive for SphereShape {
    const SHAPE: ShapeKind = ShapeKind::Sphere;
    const KINDS: &'static [ResourceKind] = &[ResourceKind::Sphere];

    fn render(&self, style: &Style, cx: &mut RenderContext<'_>) -> Result<(), GizmoError> {
        let [handle] = cx.acquire([ResourceKind::Sphere])?;
        cx.configure(
            handle,
            style,
            &Geometry::Sphere {
                center: self.center,
                radius: self.radius,
            },
        );
        cx.submit(&[handle]);
        Ok(())
    }
}

/// A solid cylinder centered on `transform`, running along its local Y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderShape {
    pub transform: Transform,
    pub radius: f32,
    pub length: f32,
}

impl Primitive for CylinderShape {
    const SHAPE: ShapeKind = ShapeKind::Cylinder;
    const KINDS: &'static [ResourceKind] = &[ResourceKind::Cylinder];

    fn render(&self, style: &Style, cx: &mut RenderContext<'_>) -> Result<(), GizmoError> {
        let [handle] = cx.acquire([ResourceKind::Cylinder])?;
        cx.configure(
            handle,
            style,
            &Geometry::Cylinder {
                transform: self.transform,
                radius: self.radius,
                length: self.length,
            },
        );
        cx.submit(&[handle]);
        Ok(())
    }
}

/// A solid cone with its base centered on `transform`, pointing along the
/// local Y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeShape {
    pub transform: Transform,
    pub radius: f32,
    pub length: f32,
}

impl Primitive for ConeShape {
    const SHAPE: ShapeKind = ShapeKind::Cone;
    const KINDS: &'static [ResourceKind] = &[ResourceKind::Cone];

    fn render(&self, style: &Style, cx: &mut RenderContext<'_>) -> Result<(), GizmoError> {
        let [handle] = cx.acquire([ResourceKind::Cone])?;
        let base = transform_point(&self.transform, Vec3::zeros());
        let tip = transform_point(&self.transform, Vec3::new(0.0, self.length, 0.0));
        cx.configure(
            handle,
            style,
            &Geometry::Cone {
                base,
                tip,
                radius: self.radius,
            },
        );
        cx.submit(&[handle]);
        Ok(())
    }
}
