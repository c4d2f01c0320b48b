//! Benchmark profiles and utilities for the Tabletop grid engine.
//!
//! - [`reference_profile`]: 100x100 grid with the robot placed at the centre
//! - [`tabletop_profile`]: the default 5x5 table, robot at the origin
//! - [`random_walk`]: deterministic direction sequence via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tabletop_core::Direction;
use tabletop_engine::GridConfig;
use tabletop_policy::WallBehavior;

/// A 100x100 grid with the robot at (50, 50).
pub fn reference_profile(wall: WallBehavior) -> GridConfig {
    GridConfig::default()
        .with_dimensions(100, 100)
        .with_initial_position((50, 50))
        .with_wall_behavior(wall)
}

/// The default 5x5 table with the robot at the origin, so that walks
/// hit the walls often.
pub fn tabletop_profile(wall: WallBehavior) -> GridConfig {
    GridConfig::default()
        .with_initial_position((0, 0))
        .with_wall_behavior(wall)
}

/// `len` directions drawn uniformly from a ChaCha8 stream seeded with `seed`.
pub fn random_walk(len: usize, seed: u64) -> Vec<Direction> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| Direction::ALL[rng.random_range(0..Direction::ALL.len())])
        .collect()
}
