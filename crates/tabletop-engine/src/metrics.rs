//! Cumulative outcome counters for a grid engine.

/// Counts of every request outcome since the engine was constructed.
///
/// The engine updates these in place; read them with
/// [`GridEngine::metrics`](crate::GridEngine::metrics).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineMetrics {
    /// Directional moves the policy accepted.
    pub moves_accepted: u64,
    /// Directional moves the policy rejected.
    pub moves_rejected: u64,
    /// Directional moves requested before any placement.
    pub moves_while_unplaced: u64,
    /// Explicit placements committed.
    pub placements_accepted: u64,
    /// Explicit placements the policy rejected.
    pub placements_rejected: u64,
    /// Placements refused for off-grid or malformed coordinates.
    pub invalid_inputs: u64,
    /// Accepted requests whose destination was off-grid.
    pub policy_violations: u64,
    /// Events published on the status stream.
    pub events_published: u64,
}

impl EngineMetrics {
    /// Total requests of any kind that left the position unchanged.
    pub fn total_refusals(&self) -> u64 {
        self.moves_rejected
            + self.moves_while_unplaced
            + self.placements_rejected
            + self.invalid_inputs
            + self.policy_violations
    }
}
