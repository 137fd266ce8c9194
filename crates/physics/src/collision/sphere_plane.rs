//! Sphere-plane collision detection

use crate::types::{MovingSphere, Plane, StaticBox, Vec3};

/// Returns the plane normal when the sphere touches or lies behind the plane.
#[must_use]
pub fn detect_sphere_plane(sphere: &MovingSphere, plane: &Plane) -> Option<Vec3> {
    if plane.signed_distance(sphere.center) > sphere.radius {
        None
    } else {
        Some(plane.normal)
    }
}

/// The x-face of a box that looks toward the world origin.
///
/// Boxes right of the origin expose their min-x face, everything else the
/// max-x face.
#[must_use]
pub fn facing_plane(aabb: &StaticBox) -> Plane {
    if aabb.center.x > 0.0 {
        Plane::new(Vec3::new(aabb.min().x, 0.0, 0.0), -Vec3::X)
    } else {
        Plane::new(Vec3::new(aabb.max().x, 0.0, 0.0), Vec3::X)
    }
}
