//! # Collision Detection and Response
//!
//! Contact tests between the moving sphere and the static scenery (arena
//! walls and axis-aligned cubes), and the velocity response applied when a
//! contact is found.

mod bounds;
mod response;
mod sphere_box;
mod sphere_plane;

pub use bounds::*;
pub use response::*;
pub use sphere_box::*;
pub use sphere_plane::*;

use crate::types::{MovingSphere, StaticBox, Vec3};

/// Contact between the sphere and one static box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Index of the box in the world's box list
    pub box_index: usize,
    /// Closest point on (or inside) the box to the sphere center
    pub point: Vec3,
    /// Unit normal pointing from the box toward the sphere
    pub normal: Vec3,
    /// Set when the sphere center lies inside the box, where the clamp test
    /// gives no separating direction and `normal` is the nearest face normal
    pub deep: bool,
}

/// Which sphere/box overlap test the step uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactTest {
    /// Clamp the center into the box, compare the squared distance strictly
    /// against the squared radius.
    #[default]
    ClampedClosestPoint,
    /// Sum the squared per-axis slab distances, compare non-strictly.
    MinkowskiApprox,
    /// Test against the box face that looks toward the world origin.
    PlaneSignedDistance,
}

impl ContactTest {
    /// Run this test for one box.
    #[must_use]
    pub fn detect(self, sphere: &MovingSphere, box_index: usize, aabb: &StaticBox) -> Option<Contact> {
        match self {
            Self::ClampedClosestPoint => detect_sphere_box_clamped(sphere, box_index, aabb),
            Self::MinkowskiApprox => detect_sphere_box_minkowski(sphere, box_index, aabb),
            Self::PlaneSignedDistance => {
                let plane = facing_plane(aabb);
                detect_sphere_plane(sphere, &plane).map(|normal| Contact {
                    box_index,
                    point: sphere.center - normal * plane.signed_distance(sphere.center),
                    normal,
                    deep: plane.signed_distance(sphere.center) < 0.0,
                })
            }
        }
    }
}
