//! Fixture movement policies.
//!
//! - [`RejectAll`]: refuses every request, including placements.
//! - [`OffGridRogue`]: accepts every request but sends it off the grid.
//! - [`CountingPolicy`]: wraps another policy and counts its calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tabletop_core::{GridExtent, GridPosition, MoveRequest};
use tabletop_policy::{Adjudication, MovementPolicy};

/// Rejects everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct RejectAll;

impl MovementPolicy for RejectAll {
    fn name(&self) -> &str {
        "reject_all"
    }

    fn adjudicate(&self, _request: MoveRequest, _extent: GridExtent) -> Adjudication {
        Adjudication::Rejected
    }
}

/// Accepts everything, redirecting the destination one cell past the
/// bottom-right corner. Breaks the on-grid contract on purpose.
#[derive(Clone, Copy, Debug, Default)]
pub struct OffGridRogue;

impl MovementPolicy for OffGridRogue {
    fn name(&self) -> &str {
        "off_grid_rogue"
    }

    fn adjudicate(&self, request: MoveRequest, extent: GridExtent) -> Adjudication {
        let outside = GridPosition::new(i64::from(extent.width()), i64::from(extent.height()));
        Adjudication::Accepted(request.redirect(outside))
    }
}

/// Delegates to `inner` and counts adjudications.
///
/// The counter is shared, so keep a [`counter()`](CountingPolicy::counter)
/// handle before moving the policy into an engine.
pub struct CountingPolicy<P> {
    pub inner: P,
    calls: Arc<AtomicUsize>,
}

impl<P: MovementPolicy> CountingPolicy<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle to the call count.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<P: MovementPolicy> MovementPolicy for CountingPolicy<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn adjudicate(&self, request: MoveRequest, extent: GridExtent) -> Adjudication {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.adjudicate(request, extent)
    }
}
