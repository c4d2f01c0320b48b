//! Grid positions and grid extents.

use std::fmt;

use crate::coord::is_within_grid;
use crate::direction::Direction;
use crate::error::CoordError;

/// An `(x, y)` pair on the tabletop.
///
/// The origin is the top-left cell; `x` grows rightward and `y` grows
/// downward. Coordinates are signed so that an off-grid *request* such
/// as `(0, -1)` is representable before a movement policy adjudicates
/// it. A position committed by the engine is always on-grid.
///
/// # Examples
///
/// ```
/// use tabletop_core::{Direction, GridPosition};
///
/// let p = GridPosition::new(2, 2);
/// assert_eq!(p.offset(Direction::Up), GridPosition::new(2, 1));
/// assert_eq!(GridPosition::from((3, 4)), GridPosition::new(3, 4));
/// assert_eq!(p.to_string(), "(2, 2)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    /// Column, increasing rightward.
    pub x: i64,
    /// Row, increasing downward.
    pub y: i64,
}

impl GridPosition {
    /// The top-left cell.
    pub const ORIGIN: GridPosition = GridPosition { x: 0, y: 0 };

    /// Create a position from its components.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Build a position from raw numeric input.
    ///
    /// Both values must be finite whole numbers. Negative values are
    /// accepted here; bounds are a separate question answered by
    /// [`GridExtent::contains`].
    pub fn from_f64(x: f64, y: f64) -> Result<Self, CoordError> {
        if !is_integral(x) || !is_integral(y) {
            return Err(CoordError::NotInteger { x, y });
        }
        Ok(Self::new(x as i64, y as i64))
    }

    /// The candidate position one unit step away in `direction`.
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

impl From<(i64, i64)> for GridPosition {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl TryFrom<&[i64]> for GridPosition {
    type Error = CoordError;

    fn try_from(coords: &[i64]) -> Result<Self, Self::Error> {
        match *coords {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(CoordError::Arity { got: coords.len() }),
        }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Dimensions of a non-empty grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridExtent {
    width: u32,
    height: u32,
}

impl GridExtent {
    /// Create an extent of `width` x `height` cells.
    ///
    /// Returns `Err(CoordError::EmptyExtent)` if either dimension is 0.
    pub fn new(width: u32, height: u32) -> Result<Self, CoordError> {
        if width == 0 || height == 0 {
            return Err(CoordError::EmptyExtent { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Whether `position` lies on this grid.
    pub fn contains(&self, position: GridPosition) -> bool {
        is_within_grid(position, self.width, self.height)
    }

    /// Row-major enumeration of every cell: `(0,0), (1,0), ..., (w-1,h-1)`.
    pub fn cells(&self) -> impl Iterator<Item = GridPosition> + '_ {
        let width = i64::from(self.width);
        (0..i64::from(self.height))
            .flat_map(move |y| (0..width).map(move |x| GridPosition::new(x, y)))
    }
}

impl fmt::Display for GridExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
