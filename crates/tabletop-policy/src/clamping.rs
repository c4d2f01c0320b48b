//! Clamping walls: the robot stops at the edge.

use tabletop_core::{GridExtent, MoveRequest};

use crate::axis;
use crate::policy::{Adjudication, MovementPolicy};
use crate::wall::WallBehavior;

/// Clamps off-grid destinations onto the boundary cell.
///
/// Unlike [`Blocking`](crate::Blocking), bumping a wall is an accepted
/// move that ends where it started, so a position event is still
/// emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Clamping;

impl MovementPolicy for Clamping {
    fn name(&self) -> &str {
        "clamping"
    }

    fn adjudicate(&self, request: MoveRequest, extent: GridExtent) -> Adjudication {
        axis::adjudicate_with(request, extent, WallBehavior::Clamp)
    }
}
