//! The grid engine state machine.
//!
//! [`GridEngine`] owns the grid extent, the robot's optional position, and
//! the active [`MovementPolicy`]. It has two states: unplaced
//! (`current_position() == None`) and placed. Every committed position
//! change goes through the policy, then through one internal commit path,
//! so the position is always on-grid.
//!
//! # Ownership model
//!
//! `GridEngine` is [`Send`] (can be moved between threads). All mutating
//! methods take `&mut self`, so two callers can never move the robot at
//! the same time without external serialization.
//!
//! # Outcomes
//!
//! Refused requests are not errors. They leave the state unchanged and
//! publish a notice on the status stream; the return value tells the
//! caller what happened.

use std::fmt;

use tabletop_core::{
    CoordError, Direction, GridExtent, GridPosition, MoveRequest, Notice, PositionEvent,
    StatusEvent,
};
use tabletop_policy::{Adjudication, MovementPolicy};

use crate::config::{ConfigError, GridConfig};
use crate::metrics::EngineMetrics;
use crate::readout::NoticeTimeouts;
use crate::stream::{EventStream, Subscription};

// Compile-time assertion: GridEngine is Send.
// Fails to compile if any field is !Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<GridEngine>();
    }
};

// ── MoveOutcome ─────────────────────────────────────────────────

/// Result of [`GridEngine::move_robot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was committed; holds the new position.
    Moved(GridPosition),
    /// The policy refused the move; holds the unchanged position.
    Blocked(GridPosition),
    /// There is no robot to move.
    Unplaced,
}

impl MoveOutcome {
    /// Position after the call: the new one if moved, the unchanged one
    /// if blocked, `None` if unplaced.
    pub fn position(self) -> Option<GridPosition> {
        match self {
            MoveOutcome::Moved(p) | MoveOutcome::Blocked(p) => Some(p),
            MoveOutcome::Unplaced => None,
        }
    }

    /// `true` for [`MoveOutcome::Moved`].
    pub fn is_moved(self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }
}

/// What the engine does with an adjudication.
enum Verdict {
    Commit(MoveRequest),
    Rejected,
    Violation(GridPosition),
}

// ── GridEngine ──────────────────────────────────────────────────

/// A single robot on a fixed rectangular grid.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use tabletop_core::{Direction, GridPosition, StatusKind};
/// use tabletop_engine::{GridConfig, GridEngine, MoveOutcome};
///
/// let mut engine = GridEngine::new(GridConfig::default()).unwrap();
/// assert_eq!(engine.current_position(), None);
///
/// let kinds = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&kinds);
/// let _sub = engine.subscribe_to_status(move |e| sink.lock().unwrap().push(e.kind()));
///
/// assert!(engine.set_position_xy(0, 0));
/// assert_eq!(engine.move_robot(Direction::Up), MoveOutcome::Blocked(GridPosition::new(0, 0)));
/// assert_eq!(engine.move_robot(Direction::Down), MoveOutcome::Moved(GridPosition::new(0, 1)));
///
/// assert_eq!(
///     *kinds.lock().unwrap(),
///     vec![StatusKind::Info, StatusKind::Position, StatusKind::Warn, StatusKind::Position],
/// );
/// ```
pub struct GridEngine {
    extent: GridExtent,
    position: Option<GridPosition>,
    policy: Box<dyn MovementPolicy>,
    status: EventStream<StatusEvent>,
    moves: EventStream<PositionEvent>,
    notice_timeouts: NoticeTimeouts,
    metrics: EngineMetrics,
}

impl GridEngine {
    /// Create an engine from a validated configuration.
    ///
    /// Fails without side effects if the configuration is invalid. When
    /// an initial position is configured, a "robot ready" notice is
    /// published so that later subscribers observe it through replay.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        let extent = config.validate()?;
        let GridConfig {
            initial_position,
            movement_policy,
            notice_timeouts,
            ..
        } = config;

        let mut engine = Self {
            extent,
            position: initial_position,
            policy: movement_policy,
            status: EventStream::new(),
            moves: EventStream::new(),
            notice_timeouts,
            metrics: EngineMetrics::default(),
        };
        tracing::debug!(
            %extent,
            policy = engine.policy.name(),
            initial = ?initial_position,
            "grid engine created"
        );
        if initial_position.is_some() {
            engine.notify(Notice::RobotReady);
        }
        Ok(engine)
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.extent.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.extent.height()
    }

    /// Grid dimensions.
    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    /// The robot's position, or `None` before the first placement.
    pub fn current_position(&self) -> Option<GridPosition> {
        self.position
    }

    /// `true` once the robot has a position.
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Name of the active movement policy.
    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Outcome counters since construction.
    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }

    /// Display timeouts a readout should apply to this engine's notices.
    pub fn notice_timeouts(&self) -> NoticeTimeouts {
        self.notice_timeouts
    }

    // ── Commands ────────────────────────────────────────────────

    /// Move the robot one cell in `direction`.
    ///
    /// The candidate cell is adjudicated by the movement policy. On
    /// acceptance the position changes and a position event is published;
    /// otherwise the position is unchanged and a notice is published.
    pub fn move_robot(&mut self, direction: Direction) -> MoveOutcome {
        let Some(from) = self.position else {
            tracing::debug!(%direction, "move requested with no robot");
            self.metrics.moves_while_unplaced += 1;
            self.notify(Notice::NoRobot);
            return MoveOutcome::Unplaced;
        };

        let request = MoveRequest::step(from, direction);
        match self.adjudicate(request) {
            Verdict::Commit(accepted) => {
                self.metrics.moves_accepted += 1;
                MoveOutcome::Moved(self.commit(accepted))
            }
            Verdict::Rejected => {
                tracing::debug!(%from, %direction, "move rejected by policy");
                self.metrics.moves_rejected += 1;
                self.notify(Notice::MovementCancelled);
                MoveOutcome::Blocked(from)
            }
            Verdict::Violation(to) => {
                self.report_violation(to);
                MoveOutcome::Blocked(from)
            }
        }
    }

    /// Place the robot at `position`.
    ///
    /// Off-grid targets are refused with an "invalid coordinates" notice.
    /// On-grid targets are routed through the movement policy as a
    /// placement request before being committed. Returns `true` on
    /// success.
    pub fn set_position(&mut self, position: impl Into<GridPosition>) -> bool {
        let position = position.into();
        if !self.extent.contains(position) {
            tracing::debug!(%position, extent = %self.extent, "placement off grid");
            self.metrics.invalid_inputs += 1;
            self.notify(Notice::InvalidCoordinates);
            return false;
        }

        match self.adjudicate(MoveRequest::placement(position)) {
            Verdict::Commit(accepted) => {
                self.metrics.placements_accepted += 1;
                self.commit(accepted);
                true
            }
            Verdict::Rejected => {
                tracing::debug!(%position, "placement rejected by policy");
                self.metrics.placements_rejected += 1;
                self.notify(Notice::PlacementCancelled);
                false
            }
            Verdict::Violation(to) => {
                self.report_violation(to);
                false
            }
        }
    }

    /// Place the robot at `(x, y)`.
    pub fn set_position_xy(&mut self, x: i64, y: i64) -> bool {
        self.set_position(GridPosition::new(x, y))
    }

    /// Place the robot from a dynamically sized coordinate list.
    ///
    /// Anything but exactly two coordinates is a caller error: it is
    /// returned as `Err` and publishes nothing.
    pub fn set_position_coords(&mut self, coords: &[i64]) -> Result<bool, CoordError> {
        let position = GridPosition::try_from(coords).inspect_err(|err| {
            tracing::warn!(%err, "set_position called with malformed coordinates");
        })?;
        Ok(self.set_position(position))
    }

    /// Place the robot from raw numeric input.
    ///
    /// Fractional, infinite, or NaN values are treated like off-grid
    /// targets: an "invalid coordinates" notice and `false`.
    pub fn set_position_f64(&mut self, x: f64, y: f64) -> bool {
        match GridPosition::from_f64(x, y) {
            Ok(position) => self.set_position(position),
            Err(err) => {
                tracing::debug!(%err, "placement with non-integer coordinates");
                self.metrics.invalid_inputs += 1;
                self.notify(Notice::InvalidCoordinates);
                false
            }
        }
    }

    // ── Streams ─────────────────────────────────────────────────

    /// Subscribe to every status event, replaying the latest one.
    pub fn subscribe_to_status<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&StatusEvent) + Send + Sync + 'static,
    {
        self.status.subscribe(handler)
    }

    /// Subscribe to committed position changes only, replaying the latest.
    pub fn subscribe_to_moves<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&PositionEvent) + Send + Sync + 'static,
    {
        self.moves.subscribe(handler)
    }

    /// A handle to the status stream.
    pub fn status_stream(&self) -> EventStream<StatusEvent> {
        self.status.clone()
    }

    /// A handle to the accepted-move stream.
    pub fn move_stream(&self) -> EventStream<PositionEvent> {
        self.moves.clone()
    }

    /// The most recent status event.
    pub fn latest_status(&self) -> Option<StatusEvent> {
        self.status.latest()
    }

    // ── Internals ───────────────────────────────────────────────

    fn adjudicate(&self, request: MoveRequest) -> Verdict {
        match self.policy.adjudicate(request, self.extent) {
            Adjudication::Accepted(accepted) if self.extent.contains(accepted.to) => {
                Verdict::Commit(accepted)
            }
            Adjudication::Accepted(accepted) => Verdict::Violation(accepted.to),
            Adjudication::Rejected => Verdict::Rejected,
        }
    }

    /// The only place the position changes.
    fn commit(&mut self, accepted: MoveRequest) -> GridPosition {
        let was_placed = self.position.is_some();
        self.position = Some(accepted.to);
        tracing::debug!(
            from = %accepted.from,
            to = %accepted.to,
            direction = ?accepted.direction,
            "position committed"
        );

        if !was_placed {
            self.notify(Notice::RobotReady);
        }
        let event = PositionEvent {
            from: accepted.from,
            to: accepted.to,
            direction: accepted.direction,
        };
        self.moves.publish(event);
        self.publish(StatusEvent::Position(event));
        accepted.to
    }

    fn report_violation(&mut self, to: GridPosition) {
        tracing::warn!(
            policy = self.policy.name(),
            %to,
            extent = %self.extent,
            "movement policy accepted an off-grid position"
        );
        self.metrics.policy_violations += 1;
        self.notify(Notice::PolicyViolation);
    }

    fn notify(&mut self, notice: Notice) {
        self.publish(notice.into());
    }

    fn publish(&mut self, event: StatusEvent) {
        self.metrics.events_published += 1;
        self.status.publish(event);
    }
}

impl fmt::Debug for GridEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridEngine")
            .field("extent", &self.extent)
            .field("position", &self.position)
            .field("policy", &self.policy.name())
            .field("subscribers", &self.status.subscriber_count())
            .finish()
    }
}
