//! Reflecting walls: the robot bounces back.

use tabletop_core::{GridExtent, MoveRequest};

use crate::axis;
use crate::policy::{Adjudication, MovementPolicy};
use crate::wall::WallBehavior;

/// Mirrors off-grid destinations back across the wall.
///
/// A unit step into the top wall from row 0 lands on row 1. On a
/// dimension of one cell there is nowhere to bounce to and the robot
/// stays put.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reflecting;

impl MovementPolicy for Reflecting {
    fn name(&self) -> &str {
        "reflecting"
    }

    fn adjudicate(&self, request: MoveRequest, extent: GridExtent) -> Adjudication {
        axis::adjudicate_with(request, extent, WallBehavior::Reflect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use tabletop_core::{Direction, GridPosition};

    #[test]
    fn bounces_off_each_wall() {
        let extent = GridExtent::new(5, 5).unwrap();
        let cases = [
            ((0, 0), Direction::Up, (0, 1)),
            ((0, 3), Direction::Left, (1, 3)),
            ((1, 4), Direction::Down, (1, 3)),
            ((4, 4), Direction::Right, (3, 4)),
        ];
        for (from, d, expected) in cases {
            let r = MoveRequest::step(GridPosition::from(from), d);
            assert_eq!(
                Reflecting.adjudicate(r, extent).destination(),
                Some(GridPosition::from(expected)),
                "{d} from {from:?}"
            );
        }
    }

    #[test]
    fn single_cell_grid_stays_put() {
        let extent = GridExtent::new(1, 1).unwrap();
        let r = MoveRequest::step(GridPosition::ORIGIN, Direction::Left);
        assert_eq!(
            Reflecting.adjudicate(r, extent).destination(),
            Some(GridPosition::ORIGIN)
        );
    }

    #[test]
    fn compliance() {
        compliance::run_full_compliance(&Reflecting);
        compliance::assert_never_rejects(&Reflecting);
    }
}
