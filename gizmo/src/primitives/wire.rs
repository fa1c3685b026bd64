use redlilium_core::math::{box_corners, Transform, Vec3, BOX_EDGES};

use super::{Primitive, ShapeKind};
use crate::host::Geometry;
use crate::render::RenderContext;
use crate::style::Style;
use crate::{GizmoError, ResourceKind};

/// A single line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineShape {
    pub from: Vec3,
    pub to: Vec3,
}

impl Primitive for LineShape {
    const SHAPE: ShapeKind = ShapeKind::Line;
    const KINDS: &'static [ResourceKind] = &[ResourceKind::Line];

    fn render(&self, style: &Style, cx: &mut RenderContext<'_>) -> Result<(), GizmoError> {
        let [line] = cx.acquire([ResourceKind::Line])?;
        let thickness = cx.config().line_thickness * style.scale;
        cx.configure(
            line,
            style,
            &Geometry::Line {
                from: self.from,
                to: self.to,
                thickness,
            },
        );
        cx.submit(&[line]);
        Ok(())
    }
}

/// A segment from `origin` to `origin + direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayShape {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Primitive for RayShape {
    const SHAPE: ShapeKind = ShapeKind::Ray;
    const KINDS: &'static [ResourceKind] = &[ResourceKind::Line];

    fn render(&self, style: &Style, cx: &mut RenderContext<'_>) -> Result<(), GizmoError> {
        LineShape {
            from: self.origin,
            to: self.origin + self.direction,
        }
        .render(style, cx)
    }
}

/// Outline of an oriented box: twelve line segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireBoxShape {
    pub transform: Transform,
    pub size: Vec3,
}

impl Primitive for WireBoxShape {
    const SHAPE: ShapeKind = ShapeKind::WireBox;
    const KINDS: &'static [ResourceKind] = &[ResourceKind::Line; 12];

    fn render(&self, style: &Style, cx: &mut RenderContext<'_>) -> Result<(), GizmoError> {
        let lines = cx.acquire([ResourceKind::Line; 12])?;
        let thickness = cx.config().line_thickness * style.scale;
        let corners = box_corners(&self.transform, self.size);
        for (&line, &(a, b)) in lines.iter().zip(BOX_EDGES.iter()) {
            cx.configure(
                line,
                style,
                &Geometry::Line {
                    from: corners[a],
                    to: corners[b],
                    thickness,
                },
            );
        }
        cx.submit(&lines);
        Ok(())
    }
}

/// Outline of a sphere: three great circles in the XY, XZ and YZ planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireSphereShape {
    pub center: Vec3,
    pub radius: f32,
}

impl Primitive for WireSphereShape {
    const SHAPE: ShapeKind = ShapeKind::WireSphere;
    const KINDS: &'static [ResourceKind] = &[ResourceKind::Ring; 3];

    fn render(&self, style: &Style, cx: &mut RenderContext<'_>) -> Result<(), GizmoError> {
        let rings = cx.acquire([ResourceKind::Ring; 3])?;
        let thickness = cx.config().ring_thickness * style.scale;
        let normals = [Vec3::z(), Vec3::y(), Vec3::x()];
        for (&ring, normal) in rings.iter().zip(normals) {
            cx.configure(
                ring,
                style,
                &Geometry::Ring {
                    center: self.center,
                    normal,
                    radius: self.radius,
                    thickness,
                },
            );
        }
        cx.submit(&rings);
        Ok(())
    }
}

/// A line shaft capped with a cone head at `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowShape {
    pub from: Vec3,
    pub to: Vec3,
}

impl Primitive for ArrowShape {
    const SHAPE: ShapeKind = ShapeKind::Arrow;
    const KINDS: &'static [ResourceKind] = &[ResourceKind::Line, ResourceKind::Cone];

    fn render(&self, style: &Style, cx: &mut RenderContext<'_>) -> Result<(), GizmoError> {
        let [shaft, head] = cx.acquire([ResourceKind::Line, ResourceKind::Cone])?;
        let config = *cx.config();

        let delta = self.to - self.from;
        let length = delta.norm();
        let direction = if length > f32::EPSILON {
            delta / length
        } else {
            Vec3::zeros()
        };
        // The head never takes more than half the arrow.
        let head_length = (config.arrow_head_length * style.scale).min(length * 0.5);
        let head_base = self.to - direction * head_length;

        cx.configure(
            shaft,
            style,
            &Geometry::Line {
                from: self.from,
                to: head_base,
                thickness: config.line_thickness * style.scale,
            },
        );
        cx.configure(
            head,
            style,
            &Geometry::Cone {
                base: head_base,
                tip: self.to,
                radius: config.arrow_head_radius * style.scale,
            },
        );
        cx.submit(&[shaft, head]);
        Ok(())
    }
}
