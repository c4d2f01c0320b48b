//! Wrapping walls: the tabletop is a torus.

use tabletop_core::{GridExtent, MoveRequest};

use crate::axis;
use crate::policy::{Adjudication, MovementPolicy};
use crate::wall::WallBehavior;

/// Wraps off-grid destinations to the opposite edge ("Pacman" walls).
///
/// A coordinate below zero becomes `dimension - 1`; a coordinate at or
/// past the dimension becomes `0`, however far past the edge the
/// request lands. Never rejects.
///
/// # Examples
///
/// ```
/// use tabletop_core::{Direction, GridExtent, GridPosition, MoveRequest};
/// use tabletop_policy::{MovementPolicy, Wrapping};
///
/// let extent = GridExtent::new(5, 5).unwrap();
/// let right = MoveRequest::step(GridPosition::new(4, 4), Direction::Right);
/// let out = Wrapping.adjudicate(right, extent).accepted().unwrap();
/// assert_eq!(out.to, GridPosition::new(0, 4));
/// assert_eq!(out.direction, Some(Direction::Right));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Wrapping;

impl MovementPolicy for Wrapping {
    fn name(&self) -> &str {
        "wrapping"
    }

    fn adjudicate(&self, request: MoveRequest, extent: GridExtent) -> Adjudication {
        axis::adjudicate_with(request, extent, WallBehavior::Wrap)
    }
}
