//! Status events published by the grid engine.
//!
//! A status event is either an accepted position change or a log-level
//! notice. Position events are the authoritative state a renderer draws;
//! notices are transient messages a readout shows for a while and then
//! clears.

use std::fmt;

use crate::direction::Direction;
use crate::position::GridPosition;

/// Severity of a log notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogLevel {
    /// Lifecycle information.
    Info,
    /// A request was refused but nothing is wrong.
    Warn,
    /// Invalid input or an unusable engine state.
    Error,
}

impl LogLevel {
    /// Lowercase tag: `info`, `warn`, or `error`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of a [`StatusEvent`], flattened over log levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// An accepted position change.
    Position,
    /// An info notice.
    Info,
    /// A warn notice.
    Warn,
    /// An error notice.
    Error,
}

impl From<LogLevel> for StatusKind {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Info => StatusKind::Info,
            LogLevel::Warn => StatusKind::Warn,
            LogLevel::Error => StatusKind::Error,
        }
    }
}

/// An accepted transition, emitted after the engine commits it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PositionEvent {
    /// Position before the transition.
    pub from: GridPosition,
    /// Committed position; always on-grid.
    pub to: GridPosition,
    /// Direction of travel, absent for explicit placements.
    pub direction: Option<Direction>,
}

impl fmt::Display for PositionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moved to coordinates: {}", self.to)?;
        if let Some(direction) = self.direction {
            write!(f, "; direction: {direction}")?;
        }
        Ok(())
    }
}

/// A log-level notice with an optional translation key for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEvent {
    /// Severity.
    pub level: LogLevel,
    /// Untranslated, human-readable message.
    pub message: String,
    /// Key a presentation layer can look up in its message catalogue.
    pub translation_key: Option<&'static str>,
}

impl LogEvent {
    /// A free-form notice without a translation key.
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            translation_key: None,
        }
    }
}

impl From<Notice> for LogEvent {
    fn from(notice: Notice) -> Self {
        Self {
            level: notice.level(),
            message: notice.message().to_owned(),
            translation_key: Some(notice.translation_key()),
        }
    }
}

/// The closed set of notices the engine itself issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notice {
    /// The engine has a placed robot and accepts moves.
    RobotReady,
    /// A move was requested before any placement.
    NoRobot,
    /// The movement policy rejected a step.
    MovementCancelled,
    /// The movement policy rejected an explicit placement.
    PlacementCancelled,
    /// An explicit placement targeted an off-grid or malformed position.
    InvalidCoordinates,
    /// The movement policy accepted a request but produced an off-grid target.
    PolicyViolation,
}

impl Notice {
    /// Severity of this notice.
    pub fn level(self) -> LogLevel {
        match self {
            Notice::RobotReady => LogLevel::Info,
            Notice::MovementCancelled | Notice::PlacementCancelled => LogLevel::Warn,
            Notice::NoRobot | Notice::InvalidCoordinates | Notice::PolicyViolation => {
                LogLevel::Error
            }
        }
    }

    /// Untranslated message text.
    pub fn message(self) -> &'static str {
        match self {
            Notice::RobotReady => "Robot ready!",
            Notice::NoRobot => "No robot present",
            Notice::MovementCancelled => "Movement cancelled",
            Notice::PlacementCancelled => "Explicit movement cancelled",
            Notice::InvalidCoordinates => "Invalid coordinates received for position",
            Notice::PolicyViolation => "Movement policy produced an off-grid position",
        }
    }

    /// Message catalogue key.
    pub fn translation_key(self) -> &'static str {
        match self {
            Notice::RobotReady => "status.robot-ready",
            Notice::NoRobot => "status.no-robot",
            Notice::MovementCancelled => "status.movement-cancelled",
            Notice::PlacementCancelled => "status.placement-cancelled",
            Notice::InvalidCoordinates => "status.invalid-coordinates",
            Notice::PolicyViolation => "status.policy-violation",
        }
    }
}

/// A unit of the status stream.
///
/// # Examples
///
/// ```
/// use tabletop_core::{Direction, GridPosition, Notice, PositionEvent, StatusEvent, StatusKind};
///
/// let moved = StatusEvent::Position(PositionEvent {
///     from: GridPosition::new(2, 2),
///     to: GridPosition::new(2, 1),
///     direction: Some(Direction::Up),
/// });
/// assert_eq!(moved.kind(), StatusKind::Position);
/// assert_eq!(moved.message(), "Moved to coordinates: (2, 1); direction: up");
///
/// let warn = StatusEvent::from(Notice::MovementCancelled);
/// assert_eq!(warn.kind(), StatusKind::Warn);
/// assert_eq!(warn.translation_key(), Some("status.movement-cancelled"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusEvent {
    /// An accepted position change.
    Position(PositionEvent),
    /// A log-level notice.
    Log(LogEvent),
}

impl StatusEvent {
    /// Flattened discriminant.
    pub fn kind(&self) -> StatusKind {
        match self {
            StatusEvent::Position(_) => StatusKind::Position,
            StatusEvent::Log(log) => log.level.into(),
        }
    }

    /// Display text for a readout.
    pub fn message(&self) -> String {
        match self {
            StatusEvent::Position(event) => event.to_string(),
            StatusEvent::Log(log) => log.message.clone(),
        }
    }

    /// Translation key, if the event carries one.
    pub fn translation_key(&self) -> Option<&'static str> {
        match self {
            StatusEvent::Position(_) => None,
            StatusEvent::Log(log) => log.translation_key,
        }
    }

    /// The position event, if this is one.
    pub fn as_position(&self) -> Option<&PositionEvent> {
        match self {
            StatusEvent::Position(event) => Some(event),
            StatusEvent::Log(_) => None,
        }
    }

    /// `true` for log notices of any level.
    pub fn is_log(&self) -> bool {
        matches!(self, StatusEvent::Log(_))
    }
}

impl From<PositionEvent> for StatusEvent {
    fn from(event: PositionEvent) -> Self {
        StatusEvent::Position(event)
    }
}

impl From<LogEvent> for StatusEvent {
    fn from(event: LogEvent) -> Self {
        StatusEvent::Log(event)
    }
}

impl From<Notice> for StatusEvent {
    fn from(notice: Notice) -> Self {
        StatusEvent::Log(notice.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_levels() {
        assert_eq!(Notice::RobotReady.level(), LogLevel::Info);
        assert_eq!(Notice::MovementCancelled.level(), LogLevel::Warn);
        assert_eq!(Notice::PlacementCancelled.level(), LogLevel::Warn);
        assert_eq!(Notice::NoRobot.level(), LogLevel::Error);
        assert_eq!(Notice::InvalidCoordinates.level(), LogLevel::Error);
        assert_eq!(Notice::PolicyViolation.level(), LogLevel::Error);
    }

    #[test]
    fn notice_becomes_log_event_with_key() {
        let event = LogEvent::from(Notice::NoRobot);
        assert_eq!(event.level, LogLevel::Error);
        assert_eq!(event.message, "No robot present");
        assert_eq!(event.translation_key, Some("status.no-robot"));
    }

    #[test]
    fn placement_message_has_no_direction() {
        let event = PositionEvent {
            from: GridPosition::new(4, 4),
            to: GridPosition::new(4, 4),
            direction: None,
        };
        assert_eq!(event.to_string(), "Moved to coordinates: (4, 4)");
    }

    #[test]
    fn kind_flattens_levels() {
        let free = StatusEvent::from(LogEvent::new(LogLevel::Info, "hello"));
        assert_eq!(free.kind(), StatusKind::Info);
        assert_eq!(free.translation_key(), None);
        assert!(free.is_log());
        assert!(free.as_position().is_none());
    }
}
