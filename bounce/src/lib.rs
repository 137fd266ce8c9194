//! # Bounce
//!
//! Headless host for the bounce demo: a small sphere drifting around a ±3
//! arena, bouncing off the walls and off two static cubes.
//!
//! The interactive demo was a window whose 2 ms timer called the
//! collision step once per tick. This crate keeps the tick contract and
//! drops the window:
//!
//! -   **[`physics`]:** the collision and motion step itself.
//! -   **[`scene`]:** JSON scene files describing the sphere, the cubes and
//!     the collision rules.
//! -   **[`app`]:** the fixed-tick loop, optionally paced in real time.
//! -   **[`trace`]:** per-tick JSON-lines output for offline inspection.

pub mod app;
pub mod trace;

pub use physics;
pub use scene;
