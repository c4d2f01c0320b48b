//! Per-axis boundary resolution shared by the deterministic policies.

use tabletop_core::{GridExtent, GridPosition, MoveRequest};

use crate::policy::Adjudication;
use crate::wall::WallBehavior;

/// Resolve a single axis value under the given wall behavior.
///
/// Returns `Some(resolved)` or `None` when [`WallBehavior::Block`] meets
/// an out-of-range value. In-range values are always returned as-is. An
/// empty axis has no cell to resolve to and always returns `None`.
pub fn resolve_axis(value: i64, len: u32, wall: WallBehavior) -> Option<i64> {
    let n = i64::from(len);
    if n == 0 {
        return None;
    }
    if (0..n).contains(&value) {
        return Some(value);
    }
    match wall {
        WallBehavior::Block => None,
        WallBehavior::Wrap => Some(if value < 0 { n - 1 } else { 0 }),
        WallBehavior::Clamp => Some(value.clamp(0, n - 1)),
        WallBehavior::Reflect => {
            if n == 1 {
                return Some(0);
            }
            // Mirror across both walls: the sequence 0..n-1 then back down
            // repeats with period 2(n-1).
            let period = 2 * (n - 1);
            let m = value.rem_euclid(period);
            Some(if m < n { m } else { period - m })
        }
    }
}

/// Resolve a whole position; `None` if either axis is blocked.
pub fn resolve_position(
    position: GridPosition,
    extent: GridExtent,
    wall: WallBehavior,
) -> Option<GridPosition> {
    let x = resolve_axis(position.x, extent.width(), wall)?;
    let y = resolve_axis(position.y, extent.height(), wall)?;
    Some(GridPosition::new(x, y))
}

/// Adjudicate `request` by resolving its destination per axis.
///
/// In-range requests are returned unchanged so that the caller sees the
/// exact request it submitted.
pub(crate) fn adjudicate_with(
    request: MoveRequest,
    extent: GridExtent,
    wall: WallBehavior,
) -> Adjudication {
    if extent.contains(request.to) {
        return Adjudication::Accepted(request);
    }
    match resolve_position(request.to, extent, wall) {
        Some(to) => Adjudication::Accepted(request.redirect(to)),
        None => Adjudication::Rejected,
    }
}
