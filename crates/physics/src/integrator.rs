//! # Physics Integration
//!
//! Velocity is a fixed per-tick displacement, so integration is a single
//! translation with no time step.

use crate::types::MovingSphere;

/// Move the sphere by its current velocity.
pub fn integrate_sphere(sphere: &mut MovingSphere) {
    sphere.center += sphere.velocity;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec3;

    #[test]
    fn moves_by_exactly_one_velocity() {
        let mut s = MovingSphere::new(Vec3::new(0.0, 0.0, -2.0), 0.1, Vec3::new(0.5, 0.0, 0.25));
        integrate_sphere(&mut s);
        assert_eq!(s.center, Vec3::new(0.5, 0.0, -1.75));
        assert_eq!(s.velocity, Vec3::new(0.5, 0.0, 0.25));
    }
}
