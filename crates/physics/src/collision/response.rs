//! Velocity response to a box contact

use super::Contact;
use crate::types::Vec3;

/// How the sphere's velocity reacts to a box contact.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ResponsePolicy {
    /// Reverse the whole velocity, whatever face was hit.
    #[default]
    Negate,
    /// Impulse reflection about the contact normal. `elasticity` is 1 for a
    /// perfectly elastic bounce and 0 for a perfectly inelastic one.
    Reflect { elasticity: f32 },
}

impl ResponsePolicy {
    #[must_use]
    pub fn apply(self, velocity: Vec3, contact: &Contact) -> Vec3 {
        match self {
            Self::Negate => -velocity,
            Self::Reflect { elasticity } => reflect(velocity, contact.normal, elasticity),
        }
    }
}

/// `v + max(-(1 + e) * (v . n), 0) * n`. A separating velocity comes back
/// unchanged.
#[must_use]
pub fn reflect(velocity: Vec3, normal: Vec3, elasticity: f32) -> Vec3 {
    let velocity_along_normal = velocity.dot(normal);
    let j = (-(1.0 + elasticity) * velocity_along_normal).max(0.0);
    velocity + normal * j
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_with_normal(normal: Vec3) -> Contact {
        Contact {
            box_index: 0,
            point: Vec3::ZERO,
            normal,
            deep: false,
        }
    }

    #[test]
    fn negate_reverses_every_axis() {
        let c = contact_with_normal(-Vec3::X);
        let v = ResponsePolicy::Negate.apply(Vec3::new(0.02, 0.01, -0.02), &c);
        assert_eq!(v, Vec3::new(-0.02, -0.01, 0.02));
    }

    #[test]
    fn elastic_reflect_flips_only_normal_component() {
        let v = reflect(Vec3::new(0.02, 0.0, 0.02), -Vec3::X, 1.0);
        assert!((v.x + 0.02).abs() < 1e-7);
        assert!((v.z - 0.02).abs() < 1e-7);
    }

    #[test]
    fn inelastic_reflect_kills_normal_component() {
        let v = reflect(Vec3::new(0.02, 0.0, 0.02), -Vec3::X, 0.0);
        assert!(v.x.abs() < 1e-7);
        assert!((v.z - 0.02).abs() < 1e-7);
    }

    #[test]
    fn separating_velocity_is_untouched() {
        let v = Vec3::new(-0.02, 0.0, 0.02);
        assert_eq!(reflect(v, -Vec3::X, 1.0), v);
    }
}
