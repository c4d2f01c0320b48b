//! Teleporting walls: walking off the table lands somewhere random.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tabletop_core::{GridExtent, GridPosition, MoveRequest};

use crate::policy::{Adjudication, MovementPolicy};

/// Sends off-grid moves to a uniformly random on-grid cell.
///
/// The RNG is a ChaCha8 stream seeded at construction, so two policies
/// built with the same seed produce the same landing sequence for the
/// same sequence of off-grid requests. In-range requests pass through
/// without consuming randomness.
///
/// # Examples
///
/// ```
/// use tabletop_core::{Direction, GridExtent, GridPosition, MoveRequest};
/// use tabletop_policy::{MovementPolicy, Teleporting};
///
/// let extent = GridExtent::new(5, 5).unwrap();
/// let off = MoveRequest::step(GridPosition::new(0, 0), Direction::Up);
///
/// let a = Teleporting::new(7).adjudicate(off, extent);
/// let b = Teleporting::new(7).adjudicate(off, extent);
/// assert_eq!(a, b);
/// assert!(extent.contains(a.destination().unwrap()));
/// ```
pub struct Teleporting {
    seed: u64,
    rng: Mutex<ChaCha8Rng>,
}

impl Teleporting {
    /// Create a teleporting policy from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// The seed this policy was built with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn landing(&self, extent: GridExtent) -> GridPosition {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let x = rng.random_range(0..i64::from(extent.width()));
        let y = rng.random_range(0..i64::from(extent.height()));
        GridPosition::new(x, y)
    }
}

impl fmt::Debug for Teleporting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Teleporting")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl MovementPolicy for Teleporting {
    fn name(&self) -> &str {
        "teleporting"
    }

    fn adjudicate(&self, request: MoveRequest, extent: GridExtent) -> Adjudication {
        if extent.contains(request.to) {
            return Adjudication::Accepted(request);
        }
        let to = self.landing(extent);
        tracing::trace!(from = %request.from, requested = %request.to, landed = %to, "teleported");
        Adjudication::Accepted(request.redirect(to))
    }
}
