//! # Collision & Motion Step
//!
//! [`advance`] is the whole per-tick contract: wall check, box contacts and
//! their response, then one integration. [`Simulation`] holds the state the
//! host loop threads through it.

use crate::collision::{check_outer_walls, AxisHits, ContactTest, ResponsePolicy};
use crate::error::PhysicsError;
use crate::integrator::integrate_sphere;
use crate::types::{MovingSphere, StaticBox, Vec3, WorldBounds};

/// Static scenery and the rules used to collide against it.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub boxes: Vec<StaticBox>,
    pub bounds: WorldBounds,
    pub contact_test: ContactTest,
    pub response: ResponsePolicy,
}

impl World {
    #[must_use]
    pub fn new(boxes: Vec<StaticBox>, bounds: WorldBounds) -> Self {
        Self {
            boxes,
            bounds,
            contact_test: ContactTest::default(),
            response: ResponsePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_contact_test(mut self, contact_test: ContactTest) -> Self {
        self.contact_test = contact_test;
        self
    }

    #[must_use]
    pub fn with_response(mut self, response: ResponsePolicy) -> Self {
        self.response = response;
        self
    }

    /// Two unit cubes at x = ±2 inside a ±3 arena.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(
            vec![
                StaticBox::with_width(Vec3::new(2.0, 0.0, 0.0), 1.0),
                StaticBox::with_width(Vec3::new(-2.0, 0.0, 0.0), 1.0),
            ],
            WorldBounds::symmetric(3.0),
        )
    }

    /// # Errors
    ///
    /// Rejects empty bounds, boxes with a non-positive or non-finite half
    /// extent, and an elasticity outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let WorldBounds { min, max } = self.bounds;
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(PhysicsError::InvalidBounds { min, max });
        }
        for (index, aabb) in self.boxes.iter().enumerate() {
            if !(aabb.half_extent.is_finite() && aabb.half_extent > 0.0) || !aabb.center.is_finite() {
                return Err(PhysicsError::InvalidBox {
                    index,
                    half_extent: aabb.half_extent,
                });
            }
        }
        if let ResponsePolicy::Reflect { elasticity } = self.response {
            if !(0.0..=1.0).contains(&elasticity) {
                return Err(PhysicsError::InvalidElasticity(elasticity));
            }
        }
        Ok(())
    }
}

/// # Errors
///
/// Rejects a non-positive or non-finite radius and a non-finite center or
/// velocity.
pub fn validate_sphere(sphere: &MovingSphere) -> Result<(), PhysicsError> {
    if !(sphere.radius.is_finite() && sphere.radius > 0.0) {
        return Err(PhysicsError::InvalidRadius(sphere.radius));
    }
    if !sphere.center.is_finite() {
        return Err(PhysicsError::NonFinitePosition);
    }
    if !sphere.velocity.is_finite() {
        return Err(PhysicsError::NonFiniteVelocity);
    }
    Ok(())
}

/// Result of one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub sphere: MovingSphere,
    /// True when a wall or any box was hit this tick
    pub collided: bool,
    pub wall_hits: AxisHits,
    /// Indices of the boxes hit this tick, in world order
    pub box_hits: Vec<usize>,
}

/// Advance the sphere by one fixed tick.
///
/// Box responses are applied once per contacting box, so two boxes hit in
/// the same tick under [`ResponsePolicy::Negate`] cancel out.
///
/// # Errors
///
/// Returns a [`PhysicsError`] when the sphere or world is degenerate, or
/// when the response or integration overflows to a non-finite value.
pub fn advance(mut sphere: MovingSphere, world: &World) -> Result<StepOutcome, PhysicsError> {
    validate_sphere(&sphere)?;
    world.validate()?;

    let wall_hits = check_outer_walls(sphere.center, &mut sphere.velocity, &world.bounds);
    if wall_hits.any() {
        tracing::debug!(x = wall_hits.x, z = wall_hits.z, "sphere hit arena wall");
    }

    let mut box_hits = Vec::new();
    for (index, aabb) in world.boxes.iter().enumerate() {
        if let Some(contact) = world.contact_test.detect(&sphere, index, aabb) {
            tracing::debug!(box_index = index, deep = contact.deep, "sphere hit box");
            sphere.velocity = world.response.apply(sphere.velocity, &contact);
            box_hits.push(index);
        }
    }

    if !sphere.velocity.is_finite() {
        return Err(PhysicsError::NonFiniteVelocity);
    }
    integrate_sphere(&mut sphere);
    if !sphere.center.is_finite() {
        return Err(PhysicsError::NonFinitePosition);
    }

    Ok(StepOutcome {
        sphere,
        collided: wall_hits.any() || !box_hits.is_empty(),
        wall_hits,
        box_hits,
    })
}

/// Snapshot of the sphere after a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereState {
    pub pos: Vec3,
    pub vel: Vec3,
}

/// Collision counters accumulated over the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    pub ticks_with_collision: u64,
    pub wall_hits_x: u64,
    pub wall_hits_z: u64,
    pub box_hits: u64,
}

/// Owns the sphere and the world for one session.
#[derive(Debug, Clone)]
pub struct Simulation {
    sphere: MovingSphere,
    world: World,
    tick: u64,
    stats: SimStats,
}

impl Simulation {
    /// # Errors
    ///
    /// Fails when the sphere or world does not validate.
    pub fn new(sphere: MovingSphere, world: World) -> Result<Self, PhysicsError> {
        validate_sphere(&sphere)?;
        world.validate()?;
        Ok(Self {
            sphere,
            world,
            tick: 0,
            stats: SimStats::default(),
        })
    }

    /// Sphere at (0, 0, -2), radius 0.1, moving (0.02, 0, 0.02) per tick, in
    /// [`World::demo`].
    #[must_use]
    pub fn demo() -> Self {
        Self {
            sphere: MovingSphere::new(Vec3::new(0.0, 0.0, -2.0), 0.1, Vec3::new(0.02, 0.0, 0.02)),
            world: World::demo(),
            tick: 0,
            stats: SimStats::default(),
        }
    }

    /// # Errors
    ///
    /// Propagates [`advance`] errors; the state is left untouched on error.
    pub fn step(&mut self) -> Result<StepOutcome, PhysicsError> {
        let outcome = advance(self.sphere, &self.world)?;
        self.sphere = outcome.sphere;
        self.tick += 1;

        if outcome.collided {
            self.stats.ticks_with_collision += 1;
        }
        self.stats.wall_hits_x += u64::from(outcome.wall_hits.x);
        self.stats.wall_hits_z += u64::from(outcome.wall_hits.z);
        self.stats.box_hits += outcome.box_hits.len() as u64;

        Ok(outcome)
    }

    /// # Errors
    ///
    /// Stops at the first failing tick.
    pub fn run(&mut self, ticks: usize) -> Result<SphereState, PhysicsError> {
        for _ in 0..ticks {
            self.step()?;
        }
        Ok(self.state())
    }

    #[must_use]
    pub fn state(&self) -> SphereState {
        SphereState {
            pos: self.sphere.center,
            vel: self.sphere.velocity,
        }
    }

    #[must_use]
    pub fn sphere(&self) -> &MovingSphere {
        &self.sphere
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn stats(&self) -> SimStats {
        self.stats
    }
}
