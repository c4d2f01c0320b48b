//! Blocking walls: the robot cannot leave the table.

use tabletop_core::{GridExtent, MoveRequest};

use crate::axis;
use crate::policy::{Adjudication, MovementPolicy};
use crate::wall::WallBehavior;

/// Rejects any move whose destination is off-grid.
///
/// Behaves like a physical table: walking into a wall does nothing.
/// This is the engine's default policy.
///
/// # Examples
///
/// ```
/// use tabletop_core::{Direction, GridExtent, GridPosition, MoveRequest};
/// use tabletop_policy::{Blocking, MovementPolicy};
///
/// let extent = GridExtent::new(5, 5).unwrap();
/// let up = MoveRequest::step(GridPosition::new(0, 0), Direction::Up);
/// assert!(Blocking.adjudicate(up, extent).is_rejected());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blocking;

impl MovementPolicy for Blocking {
    fn name(&self) -> &str {
        "blocking"
    }

    fn adjudicate(&self, request: MoveRequest, extent: GridExtent) -> Adjudication {
        axis::adjudicate_with(request, extent, WallBehavior::Block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use tabletop_core::{Direction, GridPosition};

    fn five() -> GridExtent {
        GridExtent::new(5, 5).unwrap()
    }

    fn req(fx: i64, fy: i64, tx: i64, ty: i64) -> MoveRequest {
        MoveRequest {
            from: GridPosition::new(fx, fy),
            to: GridPosition::new(tx, ty),
            direction: None,
        }
    }

    #[test]
    fn passes_through_interior_move() {
        let r = req(2, 2, 2, 3);
        assert_eq!(Blocking.adjudicate(r, five()), Adjudication::Accepted(r));
    }

    #[test]
    fn blocks_up_through_top() {
        assert!(Blocking.adjudicate(req(0, 0, 0, -1), five()).is_rejected());
    }

    #[test]
    fn blocks_left_through_side() {
        assert!(Blocking.adjudicate(req(0, 3, -1, 3), five()).is_rejected());
    }

    #[test]
    fn blocks_down_through_bottom() {
        assert!(Blocking.adjudicate(req(1, 4, 1, 5), five()).is_rejected());
    }

    #[test]
    fn blocks_right_through_far_side() {
        assert!(Blocking.adjudicate(req(4, 4, 5, 4), five()).is_rejected());
    }

    #[test]
    fn every_direction_from_centre_is_accepted() {
        for d in Direction::ALL {
            let r = MoveRequest::step(GridPosition::new(2, 2), d);
            assert_eq!(Blocking.adjudicate(r, five()), Adjudication::Accepted(r));
        }
    }

    #[test]
    fn compliance() {
        compliance::run_full_compliance(&Blocking);
    }
}
