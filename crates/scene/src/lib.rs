#![deny(clippy::all, clippy::pedantic)]
//! JSON description of a bounce scene: the moving sphere, the static cubes,
//! the arena bounds and the collision rules.
//!
//! ```json
//! {
//!   "sphere": { "center": [0, 0, -2], "radius": 0.1, "velocity": [0.02, 0, 0.02] },
//!   "boxes": [ { "center": [2, 0, 0], "half_extent": 0.5 } ],
//!   "bounds": { "min": -3, "max": 3 },
//!   "contact_test": "clamped_closest_point",
//!   "response": { "kind": "reflect", "elasticity": 0.8 }
//! }
//! ```

use anyhow::{Context, Result};
use physics::{
    ContactTest, MovingSphere, ResponsePolicy, Simulation, StaticBox, Vec3, World, WorldBounds,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub sphere: SphereDef,
    #[serde(default)]
    pub boxes: Vec<BoxDef>,
    #[serde(default)]
    pub bounds: BoundsDef,
    #[serde(default)]
    pub contact_test: ContactTestDef,
    #[serde(default)]
    pub response: ResponseDef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereDef {
    pub center: [f32; 3],
    pub radius: f32,
    #[serde(default = "zero_vec")]
    pub velocity: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxDef {
    pub center: [f32; 3],
    pub half_extent: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsDef {
    pub min: f32,
    pub max: f32,
}

impl Default for BoundsDef {
    fn default() -> Self {
        Self { min: -3.0, max: 3.0 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactTestDef {
    #[default]
    ClampedClosestPoint,
    MinkowskiApprox,
    PlaneSignedDistance,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseDef {
    #[default]
    Negate,
    Reflect {
        #[serde(default = "full_elasticity")]
        elasticity: f32,
    },
}

fn zero_vec() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}

fn full_elasticity() -> f32 {
    1.0
}

impl From<ContactTestDef> for ContactTest {
    fn from(def: ContactTestDef) -> Self {
        match def {
            ContactTestDef::ClampedClosestPoint => Self::ClampedClosestPoint,
            ContactTestDef::MinkowskiApprox => Self::MinkowskiApprox,
            ContactTestDef::PlaneSignedDistance => Self::PlaneSignedDistance,
        }
    }
}

impl From<ResponseDef> for ResponsePolicy {
    fn from(def: ResponseDef) -> Self {
        match def {
            ResponseDef::Negate => Self::Negate,
            ResponseDef::Reflect { elasticity } => Self::Reflect { elasticity },
        }
    }
}

impl Scene {
    /// The demo layout: two unit cubes at x = ±2, a ±3 arena, and a
    /// small sphere drifting diagonally from (0, 0, -2).
    #[must_use]
    pub fn demo() -> Self {
        Self {
            sphere: SphereDef {
                center: [0.0, 0.0, -2.0],
                radius: 0.1,
                velocity: [0.02, 0.0, 0.02],
            },
            boxes: vec![
                BoxDef {
                    center: [2.0, 0.0, 0.0],
                    half_extent: 0.5,
                },
                BoxDef {
                    center: [-2.0, 0.0, 0.0],
                    half_extent: 0.5,
                },
            ],
            bounds: BoundsDef::default(),
            contact_test: ContactTestDef::default(),
            response: ResponseDef::default(),
        }
    }

    /// # Errors
    ///
    /// Fails on malformed JSON or missing required fields.
    pub fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Fails when the file cannot be read or does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene file {}", path.display()))?;
        Self::from_str(&json).with_context(|| format!("parsing scene file {}", path.display()))
    }

    /// # Errors
    ///
    /// Only serialization failures, which plain numeric data never produces.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn world(&self) -> World {
        let boxes = self
            .boxes
            .iter()
            .map(|b| StaticBox::new(Vec3::from(b.center), b.half_extent))
            .collect();
        World::new(boxes, WorldBounds::new(self.bounds.min, self.bounds.max))
            .with_contact_test(self.contact_test.into())
            .with_response(self.response.into())
    }

    #[must_use]
    pub fn sphere(&self) -> MovingSphere {
        MovingSphere::new(
            Vec3::from(self.sphere.center),
            self.sphere.radius,
            Vec3::from(self.sphere.velocity),
        )
    }

    /// # Errors
    ///
    /// Fails when the scene describes degenerate geometry (see
    /// [`physics::PhysicsError`]).
    pub fn into_sim(self) -> Result<Simulation> {
        let sim = Simulation::new(self.sphere(), self.world()).context("invalid scene")?;
        Ok(sim)
    }
}
