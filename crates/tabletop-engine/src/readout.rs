//! Display model for a status readout.
//!
//! A readout shows one line: the latest notice while it is fresh, and the
//! robot's position otherwise. Position events never expire; notices
//! expire after a per-level timeout. [`StatusBoard`] implements that rule
//! over an injected clock so it can be tested without sleeping.

use std::time::{Duration, Instant};

use tabletop_core::{StatusEvent, StatusKind};

/// How long a readout shows each notice level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeTimeouts {
    /// Timeout for info notices. Default: 1 s.
    pub info: Duration,
    /// Timeout for warn notices. Default: 2 s.
    pub warn: Duration,
    /// Timeout for error notices. Default: 3 s.
    pub error: Duration,
}

impl NoticeTimeouts {
    /// Default info timeout.
    pub const DEFAULT_INFO: Duration = Duration::from_millis(1000);
    /// Default warn timeout.
    pub const DEFAULT_WARN: Duration = Duration::from_millis(2000);
    /// Default error timeout.
    pub const DEFAULT_ERROR: Duration = Duration::from_millis(3000);

    /// Build from explicit values. A zero duration falls back to the
    /// level's default.
    pub fn new(info: Duration, warn: Duration, error: Duration) -> Self {
        Self {
            info: or_default(info, Self::DEFAULT_INFO),
            warn: or_default(warn, Self::DEFAULT_WARN),
            error: or_default(error, Self::DEFAULT_ERROR),
        }
    }

    /// Timeout for events of `kind`; `None` for position events, which
    /// stay on display until replaced.
    pub fn timeout_for(&self, kind: StatusKind) -> Option<Duration> {
        match kind {
            StatusKind::Position => None,
            StatusKind::Info => Some(or_default(self.info, Self::DEFAULT_INFO)),
            StatusKind::Warn => Some(or_default(self.warn, Self::DEFAULT_WARN)),
            StatusKind::Error => Some(or_default(self.error, Self::DEFAULT_ERROR)),
        }
    }
}

fn or_default(value: Duration, default: Duration) -> Duration {
    if value.is_zero() {
        default
    } else {
        value
    }
}

impl Default for NoticeTimeouts {
    fn default() -> Self {
        Self {
            info: Self::DEFAULT_INFO,
            warn: Self::DEFAULT_WARN,
            error: Self::DEFAULT_ERROR,
        }
    }
}

/// Latest position plus latest transient notice, with expiry.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use tabletop_core::{GridPosition, Notice, PositionEvent, StatusEvent};
/// use tabletop_engine::{NoticeTimeouts, StatusBoard};
///
/// let mut board = StatusBoard::new(NoticeTimeouts::default());
/// let t0 = Instant::now();
///
/// let moved = StatusEvent::from(PositionEvent {
///     from: GridPosition::new(0, 0),
///     to: GridPosition::new(1, 0),
///     direction: None,
/// });
/// board.observe(moved.clone(), t0);
/// board.observe(StatusEvent::from(Notice::MovementCancelled), t0);
///
/// assert!(board.display(t0).unwrap().is_log());
/// assert_eq!(board.display(t0 + Duration::from_secs(2)), Some(&moved));
/// ```
#[derive(Clone, Debug)]
pub struct StatusBoard {
    timeouts: NoticeTimeouts,
    position: Option<StatusEvent>,
    notice: Option<(StatusEvent, Instant)>,
}

impl StatusBoard {
    /// An empty board.
    pub fn new(timeouts: NoticeTimeouts) -> Self {
        Self {
            timeouts,
            position: None,
            notice: None,
        }
    }

    /// Record `event`, observed at `at`.
    ///
    /// A position event replaces the sticky position line only; an
    /// unexpired notice keeps showing over it. A notice replaces the
    /// previous notice.
    pub fn observe(&mut self, event: StatusEvent, at: Instant) {
        match self.timeouts.timeout_for(event.kind()) {
            None => self.position = Some(event),
            Some(_) => self.notice = Some((event, at)),
        }
    }

    /// The unexpired notice at `now`, if any.
    pub fn notice(&self, now: Instant) -> Option<&StatusEvent> {
        let (event, at) = self.notice.as_ref()?;
        let timeout = self.timeouts.timeout_for(event.kind())?;
        (now.saturating_duration_since(*at) < timeout).then_some(event)
    }

    /// The latest position event.
    pub fn position(&self) -> Option<&StatusEvent> {
        self.position.as_ref()
    }

    /// What the readout shows at `now`.
    pub fn display(&self, now: Instant) -> Option<&StatusEvent> {
        self.notice(now).or(self.position.as_ref())
    }
}
