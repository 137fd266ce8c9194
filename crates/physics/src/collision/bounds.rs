//! Arena wall check

use crate::types::{Vec3, WorldBounds};

/// Which velocity components the wall check flipped this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisHits {
    pub x: bool,
    pub z: bool,
}

impl AxisHits {
    #[must_use]
    pub const fn any(self) -> bool {
        self.x || self.z
    }
}

/// Flip each of `velocity.x` / `velocity.z` independently when the center is
/// outside the bounds on that axis.
pub fn check_outer_walls(center: Vec3, velocity: &mut Vec3, bounds: &WorldBounds) -> AxisHits {
    let mut hits = AxisHits::default();
    if !bounds.contains(center.x) {
        velocity.x = -velocity.x;
        hits.x = true;
    }
    if !bounds.contains(center.z) {
        velocity.z = -velocity.z;
        hits.z = true;
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_the_wall_is_inside() {
        let mut v = Vec3::new(0.02, 0.0, 0.02);
        let hits = check_outer_walls(Vec3::new(3.0, 0.0, -3.0), &mut v, &WorldBounds::default());
        assert!(!hits.any());
        assert_eq!(v, Vec3::new(0.02, 0.0, 0.02));
    }

    #[test]
    fn corner_flips_both_axes() {
        let mut v = Vec3::new(0.02, 0.5, 0.02);
        let hits = check_outer_walls(Vec3::new(3.01, 0.0, -3.01), &mut v, &WorldBounds::default());
        assert_eq!(hits, AxisHits { x: true, z: true });
        assert_eq!(v, Vec3::new(-0.02, 0.5, -0.02));
    }

    #[test]
    fn y_is_unbounded() {
        let mut v = Vec3::new(0.0, 1.0, 0.0);
        let hits = check_outer_walls(Vec3::new(0.0, 100.0, 0.0), &mut v, &WorldBounds::default());
        assert!(!hits.any());
        assert_eq!(v.y, 1.0);
    }
}
