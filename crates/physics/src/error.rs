use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("sphere velocity is not finite")]
    NonFiniteVelocity,
    #[error("sphere position is not finite")]
    NonFinitePosition,
    #[error("elasticity must lie in [0, 1], got {0}")]
    InvalidElasticity(f32),
    #[error("world bounds are empty: min {min} >= max {max}")]
    InvalidBounds { min: f32, max: f32 },
    #[error("box {index} has invalid half extent {half_extent}")]
    InvalidBox { index: usize, half_extent: f32 },
}
