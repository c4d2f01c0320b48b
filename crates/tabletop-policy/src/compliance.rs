//! MovementPolicy contract test helpers.
//!
//! These functions verify that a policy satisfies the invariants the
//! engine relies on. Reused across every built-in policy's test module.

use tabletop_core::{Direction, GridExtent, MoveRequest};

use crate::policy::{Adjudication, MovementPolicy};

/// Grids exercised by every check, including degenerate strips.
fn extents() -> Vec<GridExtent> {
    [(1, 1), (1, 4), (4, 1), (5, 5), (13, 7)]
        .into_iter()
        .map(|(w, h)| GridExtent::new(w, h).expect("non-empty extent"))
        .collect()
}

/// Assert that every on-grid step is returned unchanged.
pub fn assert_in_range_pass_through(policy: &dyn MovementPolicy) {
    for extent in extents() {
        for cell in extent.cells() {
            for d in Direction::ALL {
                let request = MoveRequest::step(cell, d);
                if !extent.contains(request.to) {
                    continue;
                }
                assert_eq!(
                    policy.adjudicate(request, extent),
                    Adjudication::Accepted(request),
                    "{} altered in-range step {request:?} on {extent}",
                    policy.name()
                );
            }
        }
    }
}

/// Assert that the degenerate placement request passes through for every cell.
pub fn assert_placement_pass_through(policy: &dyn MovementPolicy) {
    for extent in extents() {
        for cell in extent.cells() {
            let request = MoveRequest::placement(cell);
            assert_eq!(
                policy.adjudicate(request, extent),
                Adjudication::Accepted(request),
                "{} altered placement at {cell} on {extent}",
                policy.name()
            );
        }
    }
}

/// Assert that accepted edge-crossing steps land on-grid and keep
/// `from` and `direction`.
pub fn assert_accepted_on_grid(policy: &dyn MovementPolicy) {
    for extent in extents() {
        for cell in extent.cells() {
            for d in Direction::ALL {
                let request = MoveRequest::step(cell, d);
                let Adjudication::Accepted(out) = policy.adjudicate(request, extent) else {
                    continue;
                };
                assert!(
                    extent.contains(out.to),
                    "{} accepted off-grid {:?} on {extent}",
                    policy.name(),
                    out.to
                );
                assert_eq!(out.from, request.from, "{} rewrote from", policy.name());
                assert_eq!(
                    out.direction, request.direction,
                    "{} dropped direction",
                    policy.name()
                );
            }
        }
    }
}

/// Assert that the policy accepts every step, on-grid or not.
pub fn assert_never_rejects(policy: &dyn MovementPolicy) {
    for extent in extents() {
        for cell in extent.cells() {
            for d in Direction::ALL {
                let request = MoveRequest::step(cell, d);
                assert!(
                    !policy.adjudicate(request, extent).is_rejected(),
                    "{} rejected {request:?} on {extent}",
                    policy.name()
                );
            }
        }
    }
}

/// Run all contract checks shared by every policy.
pub fn run_full_compliance(policy: &dyn MovementPolicy) {
    assert_in_range_pass_through(policy);
    assert_placement_pass_through(policy);
    assert_accepted_on_grid(policy);
}
