//! Value-level selection of the deterministic movement policies.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::blocking::Blocking;
use crate::clamping::Clamping;
use crate::policy::MovementPolicy;
use crate::reflecting::Reflecting;
use crate::wrapping::Wrapping;

/// How the tabletop's walls treat a robot that walks into them.
///
/// Each variant names one of the stateless built-in policies. Use
/// [`into_policy`](WallBehavior::into_policy) to obtain the boxed policy
/// the engine consumes.
///
/// # Examples
///
/// ```
/// use tabletop_core::{Direction, GridExtent, GridPosition, MoveRequest};
/// use tabletop_policy::{MovementPolicy, WallBehavior};
///
/// let extent = GridExtent::new(5, 5).unwrap();
/// let up = MoveRequest::step(GridPosition::new(0, 0), Direction::Up);
///
/// // Block: the move is refused.
/// assert!(WallBehavior::Block.into_policy().adjudicate(up, extent).is_rejected());
///
/// // Wrap: the robot reappears at the bottom edge.
/// let wrapped = WallBehavior::Wrap.into_policy().adjudicate(up, extent);
/// assert_eq!(wrapped.destination(), Some(GridPosition::new(0, 4)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WallBehavior {
    /// Off-grid moves are rejected.
    #[default]
    Block,
    /// Off-grid moves wrap to the opposite side (periodic).
    Wrap,
    /// Off-grid moves stop on the boundary cell.
    Clamp,
    /// Off-grid moves are mirrored back across the wall.
    Reflect,
}

impl WallBehavior {
    /// Every behavior in declaration order.
    pub const ALL: [WallBehavior; 4] = [
        WallBehavior::Block,
        WallBehavior::Wrap,
        WallBehavior::Clamp,
        WallBehavior::Reflect,
    ];

    /// Build the policy this behavior names.
    pub fn into_policy(self) -> Box<dyn MovementPolicy> {
        match self {
            WallBehavior::Block => Box::new(Blocking),
            WallBehavior::Wrap => Box::new(Wrapping),
            WallBehavior::Clamp => Box::new(Clamping),
            WallBehavior::Reflect => Box::new(Reflecting),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            WallBehavior::Block => "block",
            WallBehavior::Wrap => "wrap",
            WallBehavior::Clamp => "clamp",
            WallBehavior::Reflect => "reflect",
        }
    }
}

impl fmt::Display for WallBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WallBehavior {
    type Err = ParseWallBehaviorError;

    /// Accepts the variant names plus `pacman` for [`WallBehavior::Wrap`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pacman") {
            return Ok(WallBehavior::Wrap);
        }
        WallBehavior::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseWallBehaviorError {
                input: s.to_owned(),
            })
    }
}

/// A string did not name a [`WallBehavior`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown wall behavior '{input}', expected one of block, wrap, clamp, reflect")]
pub struct ParseWallBehaviorError {
    /// The rejected input, trimmed.
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_block() {
        assert_eq!(WallBehavior::default(), WallBehavior::Block);
    }

    #[test]
    fn policy_names_follow_behavior() {
        assert_eq!(WallBehavior::Block.into_policy().name(), "blocking");
        assert_eq!(WallBehavior::Wrap.into_policy().name(), "wrapping");
        assert_eq!(WallBehavior::Clamp.into_policy().name(), "clamping");
        assert_eq!(WallBehavior::Reflect.into_policy().name(), "reflecting");
    }

    #[test]
    fn parse_accepts_pacman_alias() {
        assert_eq!("Pacman".parse::<WallBehavior>().unwrap(), WallBehavior::Wrap);
        assert_eq!("REFLECT".parse::<WallBehavior>().unwrap(), WallBehavior::Reflect);
        assert!("bouncy".parse::<WallBehavior>().is_err());
    }
}
