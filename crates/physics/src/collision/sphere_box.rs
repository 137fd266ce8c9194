//! Sphere-box collision detection

use super::Contact;
use crate::types::{MovingSphere, StaticBox, Vec3};

const NORMAL_EPSILON: f32 = 1e-6;

/// Closest-point clamp test. Contact iff `dist² < r²`.
#[must_use]
pub fn detect_sphere_box_clamped(
    sphere: &MovingSphere,
    box_index: usize,
    aabb: &StaticBox,
) -> Option<Contact> {
    let closest = closest_point_on_box(sphere.center, aabb);
    let distance_squared = (closest - sphere.center).length_squared();

    if distance_squared < sphere.radius * sphere.radius {
        Some(build_contact(sphere.center, closest, distance_squared, box_index, aabb))
    } else {
        None
    }
}

/// Sum of squared distances outside each axis slab. Contact iff `sum <= r²`.
#[must_use]
pub fn detect_sphere_box_minkowski(
    sphere: &MovingSphere,
    box_index: usize,
    aabb: &StaticBox,
) -> Option<Contact> {
    let min = aabb.min();
    let max = aabb.max();
    let c = sphere.center;

    let mut dmin = 0.0_f32;
    for axis in 0..3 {
        if c[axis] < min[axis] {
            dmin += (c[axis] - min[axis]).powi(2);
        } else if c[axis] > max[axis] {
            dmin += (c[axis] - max[axis]).powi(2);
        }
    }

    if dmin <= sphere.radius * sphere.radius {
        let closest = closest_point_on_box(c, aabb);
        Some(build_contact(c, closest, dmin, box_index, aabb))
    } else {
        None
    }
}

/// Find the closest point on an axis-aligned box to a given point
#[must_use]
pub fn closest_point_on_box(point: Vec3, aabb: &StaticBox) -> Vec3 {
    point.clamp(aabb.min(), aabb.max())
}

fn build_contact(
    center: Vec3,
    closest: Vec3,
    distance_squared: f32,
    box_index: usize,
    aabb: &StaticBox,
) -> Contact {
    let distance = distance_squared.sqrt();
    let deep = distance <= NORMAL_EPSILON;
    let normal = if deep {
        closest_face_normal(center, aabb)
    } else {
        (center - closest) * (1.0 / distance)
    };
    Contact {
        box_index,
        point: closest,
        normal,
        deep,
    }
}

/// Outward normal of the box face nearest to a point inside the box.
#[must_use]
pub fn closest_face_normal(point: Vec3, aabb: &StaticBox) -> Vec3 {
    let local = point - aabb.center;
    let h = aabb.half_extent;
    let dx = h - local.x.abs();
    let dy = h - local.y.abs();
    let dz = h - local.z.abs();

    if dx < dy && dx < dz {
        Vec3::new(signum_or_one(local.x), 0.0, 0.0)
    } else if dy < dz {
        Vec3::new(0.0, signum_or_one(local.y), 0.0)
    } else {
        Vec3::new(0.0, 0.0, signum_or_one(local.z))
    }
}

// f32::signum(0.0) is 1.0, but -0.0 maps to -1.0; treat both as +.
fn signum_or_one(v: f32) -> f32 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}
