use redlilium_core::math::{transform_from_position, Transform, Vec3};

use crate::gizmos::Gizmos;
use crate::host::GizmoHost;
use crate::primitives::{
    ArrowShape, BoxShape, ConeShape, CylinderShape, LineShape, PointShape, RayShape, SphereShape,
    WireBoxShape, WireSphereShape,
};
use crate::style::{Color3, StyleOverride};
use crate::GizmoError;

impl<H: GizmoHost> Gizmos<H> {
    /// Draw a point marker.
    pub fn draw_point(&mut self, position: Vec3) -> Result<(), GizmoError> {
        self.draw(PointShape { position })
    }

    /// Draw a single line segment.
    pub fn draw_line(&mut self, from: Vec3, to: Vec3) -> Result<(), GizmoError> {
        self.draw(LineShape { from, to })
    }

    /// Draw a segment from `origin` along `direction`.
    pub fn draw_ray(&mut self, origin: Vec3, direction: Vec3) -> Result<(), GizmoError> {
        self.draw(RayShape { origin, direction })
    }

    /// Draw an arrow pointing at `to`.
    pub fn draw_arrow(&mut self, from: Vec3, to: Vec3) -> Result<(), GizmoError> {
        self.draw(ArrowShape { from, to })
    }

    /// Draw a solid oriented box.
    pub fn draw_box(&mut self, transform: Transform, size: Vec3) -> Result<(), GizmoError> {
        self.draw(BoxShape { transform, size })
    }

    /// Draw the twelve edges of an oriented box.
    pub fn draw_wire_box(&mut self, transform: Transform, size: Vec3) -> Result<(), GizmoError> {
        self.draw(WireBoxShape { transform, size })
    }

    /// Draw an axis-aligned bounding box from min to max corners (12 edges).
    pub fn draw_aabb(&mut self, min: Vec3, max: Vec3) -> Result<(), GizmoError> {
        self.draw_wire_box(transform_from_position((min + max) * 0.5), max - min)
    }

    /// Draw a solid sphere.
    pub fn draw_sphere(&mut self, center: Vec3, radius: f32) -> Result<(), GizmoError> {
        self.draw(SphereShape { center, radius })
    }

    /// Draw a wireframe sphere using 3 great circles (XY, XZ, YZ planes).
    pub fn draw_wire_sphere(&mut self, center: Vec3, radius: f32) -> Result<(), GizmoError> {
        self.draw(WireSphereShape { center, radius })
    }

    /// Draw a cylinder along the local Y axis of `transform`.
    pub fn draw_cylinder(
        &mut self,
        transform: Transform,
        radius: f32,
        length: f32,
    ) -> Result<(), GizmoError> {
        self.draw(CylinderShape {
            transform,
            radius,
            length,
        })
    }

    /// Draw a cone whose base sits at `transform`, pointing along its local Y axis.
    pub fn draw_cone(
        &mut self,
        transform: Transform,
        radius: f32,
        length: f32,
    ) -> Result<(), GizmoError> {
        self.draw(ConeShape {
            transform,
            radius,
            length,
        })
    }

    /// Draw coordinate axes at `transform` (X=red, Y=green, Z=blue).
    pub fn draw_axes(&mut self, transform: Transform, size: f32) -> Result<(), GizmoError> {
        let origin = transform.translation.vector;
        let axes = [
            (Vec3::x(), Color3::RED),
            (Vec3::y(), Color3::GREEN),
            (Vec3::z(), Color3::BLUE),
        ];
        for (axis, color) in axes {
            let tip = origin + transform.rotation * axis * size;
            self.draw_with_style(
                &StyleOverride::new().with_color(color),
                ArrowShape { from: origin, to: tip },
            )?;
        }
        Ok(())
    }
}
