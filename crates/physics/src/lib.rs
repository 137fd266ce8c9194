#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Bounce Physics
//!
//! A single sphere bouncing around a square arena of static cubes.
//!
//! The crate is the collision core of the bounce demo. Every fixed tick the
//! host calls [`advance`] (or [`Simulation::step`]), which
//!
//! 1. flips the x/z velocity components when the sphere is outside the
//!    [`WorldBounds`],
//! 2. tests the sphere against every [`StaticBox`] with the world's
//!    [`ContactTest`] and applies the [`ResponsePolicy`] per contact,
//! 3. translates the sphere by its velocity exactly once.
//!
//! Velocities are per-tick displacements; there is no time step.
//!
//! ## Usage
//!
//! ```rust
//! use physics::Simulation;
//!
//! let mut sim = Simulation::demo();
//! let state = sim.run(150)?;
//! assert!(state.pos.x.abs() < 3.1 && state.pos.z.abs() < 3.1);
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod collision;
pub mod error;
pub mod integrator;
pub mod simulation;
pub mod types;

pub use collision::{AxisHits, Contact, ContactTest, ResponsePolicy};
pub use error::PhysicsError;
pub use simulation::{advance, validate_sphere, SimStats, Simulation, SphereState, StepOutcome, World};
pub use types::{MovingSphere, Plane, StaticBox, Vec3, WorldBounds};
