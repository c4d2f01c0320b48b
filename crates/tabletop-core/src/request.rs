//! Proposed transitions awaiting policy adjudication.

use crate::direction::Direction;
use crate::position::GridPosition;

/// A proposed move from one position to another.
///
/// `to` may be off-grid: it is the raw candidate before a movement
/// policy has accepted, adjusted, or rejected it.
///
/// # Examples
///
/// ```
/// use tabletop_core::{Direction, GridPosition, MoveRequest};
///
/// let step = MoveRequest::step(GridPosition::new(0, 0), Direction::Up);
/// assert_eq!(step.to, GridPosition::new(0, -1));
/// assert_eq!(step.direction, Some(Direction::Up));
///
/// let place = MoveRequest::placement(GridPosition::new(3, 3));
/// assert!(place.is_placement());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    /// Position before the move.
    pub from: GridPosition,
    /// Candidate position after the move.
    pub to: GridPosition,
    /// Direction of travel, absent for explicit placements.
    pub direction: Option<Direction>,
}

impl MoveRequest {
    /// A single step from `from` in `direction`.
    pub fn step(from: GridPosition, direction: Direction) -> Self {
        Self {
            from,
            to: from.offset(direction),
            direction: Some(direction),
        }
    }

    /// The degenerate `from == to` request used for explicit placement.
    pub fn placement(position: GridPosition) -> Self {
        Self {
            from: position,
            to: position,
            direction: None,
        }
    }

    /// The same request with a different destination.
    ///
    /// Policies use this to adjust `to` while preserving `from` and
    /// `direction`.
    pub fn redirect(self, to: GridPosition) -> Self {
        Self { to, ..self }
    }

    /// `true` for an explicit placement (`from == to`, no direction).
    pub fn is_placement(&self) -> bool {
        self.from == self.to && self.direction.is_none()
    }
}
