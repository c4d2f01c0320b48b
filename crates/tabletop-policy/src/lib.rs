//! Movement policies for the Tabletop grid engine.
//!
//! This crate defines the [`MovementPolicy`] trait, the one extension
//! point of the engine, along with the built-in policies that decide
//! what happens when a requested move would leave the grid.
//!
//! # Policies
//!
//! - [`Blocking`]: off-grid moves are rejected (a real table)
//! - [`Wrapping`]: off-grid moves wrap to the opposite edge (torus)
//! - [`Clamping`]: off-grid moves stop at the edge
//! - [`Reflecting`]: off-grid moves bounce back off the wall
//! - [`Teleporting`]: off-grid moves land on a seeded random cell
//!
//! [`WallBehavior`] selects one of the deterministic policies by value.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod blocking;
pub mod clamping;
pub mod policy;
pub mod reflecting;
pub mod teleporting;
pub mod wall;
pub mod wrapping;

#[cfg(test)]
pub(crate) mod compliance;

pub use blocking::Blocking;
pub use clamping::Clamping;
pub use policy::{Adjudication, MovementPolicy};
pub use reflecting::Reflecting;
pub use teleporting::Teleporting;
pub use wall::{ParseWallBehaviorError, WallBehavior};
pub use wrapping::Wrapping;
