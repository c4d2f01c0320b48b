//! The [`MovementPolicy`] trait and its [`Adjudication`] outcome.

use tabletop_core::{GridExtent, GridPosition, MoveRequest};

/// Outcome of adjudicating a [`MoveRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adjudication {
    /// The move happens, possibly with an adjusted destination.
    Accepted(MoveRequest),
    /// The move does not happen; the position is unchanged.
    Rejected,
}

impl Adjudication {
    /// The accepted request, if any.
    pub fn accepted(self) -> Option<MoveRequest> {
        match self {
            Adjudication::Accepted(request) => Some(request),
            Adjudication::Rejected => None,
        }
    }

    /// Destination of an accepted request.
    pub fn destination(self) -> Option<GridPosition> {
        self.accepted().map(|r| r.to)
    }

    /// `true` for [`Adjudication::Rejected`].
    pub fn is_rejected(self) -> bool {
        matches!(self, Adjudication::Rejected)
    }
}

/// Decides what happens to a move whose destination may leave the grid.
///
/// # Contract
///
/// - A request whose `to` is already on-grid is returned unchanged. This
///   includes the degenerate `from == to` placement request the engine
///   routes through the policy for explicit placements.
/// - An accepted request keeps its `from` and `direction`.
/// - An accepted request's `to` must be on-grid. The engine treats an
///   off-grid acceptance as a rejection and reports it.
/// - `adjudicate` reads the extent and never mutates engine state.
///
/// # Object safety
///
/// This trait is object-safe; the engine stores its policy as
/// `Box<dyn MovementPolicy>`.
///
/// # Examples
///
/// A policy that refuses to move down, whatever the bounds:
///
/// ```
/// use tabletop_core::{Direction, GridExtent, GridPosition, MoveRequest};
/// use tabletop_policy::{Adjudication, MovementPolicy};
///
/// struct NoDownhill;
///
/// impl MovementPolicy for NoDownhill {
///     fn name(&self) -> &str { "no_downhill" }
///
///     fn adjudicate(&self, request: MoveRequest, extent: GridExtent) -> Adjudication {
///         if request.direction == Some(Direction::Down) || !extent.contains(request.to) {
///             return Adjudication::Rejected;
///         }
///         Adjudication::Accepted(request)
///     }
/// }
///
/// let extent = GridExtent::new(5, 5).unwrap();
/// let down = MoveRequest::step(GridPosition::new(2, 2), Direction::Down);
/// assert!(NoDownhill.adjudicate(down, extent).is_rejected());
/// ```
pub trait MovementPolicy: Send + 'static {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Accept, adjust, or reject `request` on a grid of `extent`.
    fn adjudicate(&self, request: MoveRequest, extent: GridExtent) -> Adjudication;
}

impl<P: MovementPolicy + ?Sized> MovementPolicy for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn adjudicate(&self, request: MoveRequest, extent: GridExtent) -> Adjudication {
        (**self).adjudicate(request, extent)
    }
}
