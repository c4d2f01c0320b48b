//! Engine configuration, validation, and error types.
//!
//! [`GridConfig`] is the builder-input for constructing a [`GridEngine`].
//! [`validate()`](GridConfig::validate) checks every structural invariant
//! up front; [`GridEngine::new`] calls it, so construction either succeeds
//! completely or fails with no engine at all.
//!
//! [`GridEngine`]: crate::GridEngine
//! [`GridEngine::new`]: crate::GridEngine::new

use std::fmt;

use tabletop_core::{is_non_negative_integer, CoordError, GridExtent, GridPosition};
use tabletop_policy::{Blocking, MovementPolicy, WallBehavior};

use crate::readout::NoticeTimeouts;

/// Largest accepted grid dimension.
///
/// Matches the `i32` range so that every on-grid coordinate converts
/// losslessly to any signed index type a renderer uses.
pub const MAX_DIMENSION: i64 = i32::MAX as i64;

const DEFAULT_DIMENSION: i64 = 5;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GridConfig::validate()`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A dimension is zero or negative.
    #[error("{name} must be a positive integer, got {value}")]
    InvalidDimension {
        /// `"width"` or `"height"`.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// A raw dimension is fractional, infinite, or NaN.
    #[error("{name} must be a whole number, got {value}")]
    NonIntegerDimension {
        /// `"width"` or `"height"`.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A dimension exceeds [`MAX_DIMENSION`].
    #[error("{name} {value} exceeds maximum of {max}")]
    DimensionTooLarge {
        /// `"width"` or `"height"`.
        name: &'static str,
        /// The rejected value.
        value: i64,
        /// The limit.
        max: i64,
    },
    /// The configured initial position is not on the grid.
    #[error("initial position {position} is outside the {extent} grid")]
    InitialPositionOutOfBounds {
        /// The configured position.
        position: GridPosition,
        /// The configured extent.
        extent: GridExtent,
    },
    /// Building the extent failed.
    #[error("invalid extent: {0}")]
    Coord(#[from] CoordError),
}

// ── GridConfig ─────────────────────────────────────────────────────

/// Complete configuration for constructing a grid engine.
///
/// # Examples
///
/// ```
/// use tabletop_core::GridPosition;
/// use tabletop_engine::GridConfig;
/// use tabletop_policy::WallBehavior;
///
/// let config = GridConfig::default()
///     .with_dimensions(8, 3)
///     .with_initial_position(GridPosition::new(7, 2))
///     .with_wall_behavior(WallBehavior::Wrap);
///
/// let extent = config.validate().unwrap();
/// assert_eq!((extent.width(), extent.height()), (8, 3));
/// ```
pub struct GridConfig {
    /// Number of columns. Must be in `1..=MAX_DIMENSION`.
    pub width: i64,
    /// Number of rows. Must be in `1..=MAX_DIMENSION`.
    pub height: i64,
    /// Where the robot starts, or `None` to start unplaced.
    pub initial_position: Option<GridPosition>,
    /// Adjudicates every move and placement.
    pub movement_policy: Box<dyn MovementPolicy>,
    /// How long a readout shows each notice level.
    pub notice_timeouts: NoticeTimeouts,
}

impl Default for GridConfig {
    /// A 5x5 grid, no robot, blocking walls.
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            initial_position: None,
            movement_policy: Box::new(Blocking),
            notice_timeouts: NoticeTimeouts::default(),
        }
    }
}

impl GridConfig {
    /// Set both dimensions.
    pub fn with_dimensions(mut self, width: i64, height: i64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set dimensions from raw numeric input, such as a form field.
    ///
    /// Fails with [`ConfigError::NonIntegerDimension`] for fractional,
    /// infinite, or NaN values. Range checks are left to
    /// [`validate()`](Self::validate).
    pub fn try_with_raw_dimensions(self, width: f64, height: f64) -> Result<Self, ConfigError> {
        let width = raw_dimension("width", width)?;
        let height = raw_dimension("height", height)?;
        Ok(self.with_dimensions(width, height))
    }

    /// Start the robot at `position`.
    pub fn with_initial_position(mut self, position: impl Into<GridPosition>) -> Self {
        self.initial_position = Some(position.into());
        self
    }

    /// Use `policy` to adjudicate moves.
    pub fn with_policy(mut self, policy: impl MovementPolicy) -> Self {
        self.movement_policy = Box::new(policy);
        self
    }

    /// Use the built-in policy for `wall`.
    pub fn with_wall_behavior(mut self, wall: WallBehavior) -> Self {
        self.movement_policy = wall.into_policy();
        self
    }

    /// Override notice display timeouts.
    pub fn with_notice_timeouts(mut self, timeouts: NoticeTimeouts) -> Self {
        self.notice_timeouts = timeouts;
        self
    }

    /// Validate all structural invariants and return the grid extent.
    pub fn validate(&self) -> Result<GridExtent, ConfigError> {
        let width = dimension("width", self.width)?;
        let height = dimension("height", self.height)?;
        let extent = GridExtent::new(width, height)?;
        if let Some(position) = self.initial_position {
            if !extent.contains(position) {
                return Err(ConfigError::InitialPositionOutOfBounds { position, extent });
            }
        }
        Ok(extent)
    }
}

fn dimension(name: &'static str, value: i64) -> Result<u32, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::InvalidDimension { name, value });
    }
    if value > MAX_DIMENSION {
        return Err(ConfigError::DimensionTooLarge {
            name,
            value,
            max: MAX_DIMENSION,
        });
    }
    u32::try_from(value).map_err(|_| ConfigError::DimensionTooLarge {
        name,
        value,
        max: MAX_DIMENSION,
    })
}

fn raw_dimension(name: &'static str, value: f64) -> Result<i64, ConfigError> {
    // Negative whole numbers pass here and fail as InvalidDimension later.
    if !is_non_negative_integer(value.abs()) {
        return Err(ConfigError::NonIntegerDimension { name, value });
    }
    if value.abs() > MAX_DIMENSION as f64 {
        return Err(ConfigError::DimensionTooLarge {
            name,
            value: if value < 0.0 { i64::MIN } else { i64::MAX },
            max: MAX_DIMENSION,
        });
    }
    Ok(value as i64)
}

impl fmt::Debug for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridConfig")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("initial_position", &self.initial_position)
            .field("movement_policy", &self.movement_policy.name())
            .field("notice_timeouts", &self.notice_timeouts)
            .finish()
    }
}
