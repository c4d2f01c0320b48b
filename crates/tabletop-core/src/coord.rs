//! Pure coordinate predicates.
//!
//! These are total functions: they never fail and never panic, whatever
//! the input. Raw numeric input (a coordinate form, a parsed config value)
//! is checked with the `f64` predicates before it becomes a typed
//! [`GridPosition`]; typed positions are checked with [`is_within_grid`].

use crate::position::GridPosition;

/// `true` iff `n` is a finite integer and `n >= 0`.
///
/// # Examples
///
/// ```
/// use tabletop_core::is_non_negative_integer;
///
/// assert!(is_non_negative_integer(0.0));
/// assert!(is_non_negative_integer(7.0));
/// assert!(!is_non_negative_integer(-1.0));
/// assert!(!is_non_negative_integer(2.5));
/// assert!(!is_non_negative_integer(f64::NAN));
/// ```
pub fn is_non_negative_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n >= 0.0
}

/// `true` iff `n` is a finite integer and `n > 0`.
///
/// Grid dimensions use this: a zero-sized grid is invalid.
pub fn is_positive_integer(n: f64) -> bool {
    is_non_negative_integer(n) && n > 0.0
}

/// `true` iff `pos` lies on a `width` x `height` grid.
///
/// Both coordinates must be non-negative and strictly below the
/// corresponding dimension. A zero dimension contains nothing.
///
/// # Examples
///
/// ```
/// use tabletop_core::{is_within_grid, GridPosition};
///
/// assert!(is_within_grid(GridPosition::new(4, 4), 5, 5));
/// assert!(!is_within_grid(GridPosition::new(5, 0), 5, 5));
/// assert!(!is_within_grid(GridPosition::new(0, -1), 5, 5));
/// ```
pub fn is_within_grid(pos: GridPosition, width: u32, height: u32) -> bool {
    pos.x >= 0 && pos.y >= 0 && pos.x < i64::from(width) && pos.y < i64::from(height)
}
