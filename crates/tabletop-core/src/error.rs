//! Error types for coordinate conversion.
//!
//! Runtime rejections (blocked moves, off-grid placements) are not
//! errors; they are reported on the status stream. The types here cover
//! input that cannot even be expressed as a position.

use thiserror::Error;

/// Raw input could not be turned into a grid position or extent.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CoordError {
    /// A coordinate list did not hold exactly two values.
    #[error("expected 2 coordinates (x, y), got {got}")]
    Arity {
        /// Number of coordinates supplied.
        got: usize,
    },
    /// A raw numeric coordinate was fractional or not finite.
    #[error("coordinates ({x}, {y}) are not whole numbers")]
    NotInteger {
        /// Raw x value.
        x: f64,
        /// Raw y value.
        y: f64,
    },
    /// A grid extent with a zero dimension.
    #[error("grid extent {width}x{height} has no cells")]
    EmptyExtent {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

/// A string did not name a [`Direction`](crate::Direction).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown direction '{input}', expected one of up, down, left, right")]
pub struct ParseDirectionError {
    /// The rejected input, trimmed.
    pub input: String,
}
