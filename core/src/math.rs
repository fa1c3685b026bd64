//! Math type aliases and helper functions.
//!
//! All gizmo geometry is expressed in f32 world space. A [`Transform`] is a
//! rigid placement (rotation + translation); scale travels separately as a
//! size vector so that it never skews the rotation.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// Unit quaternion (f32).
pub type Rotation = nalgebra::UnitQuaternion<f32>;

/// Rigid world placement: rotation followed by translation.
pub type Transform = nalgebra::Isometry3<f32>;

/// Build a transform that only translates.
pub fn transform_from_position(position: Vec3) -> Transform {
    Transform::translation(position.x, position.y, position.z)
}

/// Build a transform from a translation and a rotation.
pub fn transform_from_position_rotation(position: Vec3, rotation: Rotation) -> Transform {
    Transform::from_parts(nalgebra::Translation3::from(position), rotation)
}

/// Transform a local-space point into world space.
pub fn transform_point(transform: &Transform, local: Vec3) -> Vec3 {
    transform
        .transform_point(&nalgebra::Point3::from(local))
        .coords
}

/// The eight corners of an oriented box of full extents `size`.
///
/// Order: bottom face `[---, +--, ++-, -+-]`, then top face with `z` flipped
/// to `+`, matching the edge tables used by wire shapes.
pub fn box_corners(transform: &Transform, size: Vec3) -> [Vec3; 8] {
    let h = size * 0.5;
    let corner = |sx: f32, sy: f32, sz: f32| {
        transform_point(transform, Vec3::new(h.x * sx, h.y * sy, h.z * sz))
    };
    [
        corner(-1.0, -1.0, -1.0),
        corner(1.0, -1.0, -1.0),
        corner(1.0, 1.0, -1.0),
        corner(-1.0, 1.0, -1.0),
        corner(-1.0, -1.0, 1.0),
        corner(1.0, -1.0, 1.0),
        corner(1.0, 1.0, 1.0),
        corner(-1.0, 1.0, 1.0),
    ]
}

/// Corner index pairs forming the 12 edges of a box from [`box_corners`].
pub const BOX_EDGES: [(usize, usize); 12] = [
    // Bottom face
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    // Top face
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    // Vertical edges
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];
