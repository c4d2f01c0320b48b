//! Core types for the Tabletop grid engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types every other crate speaks in: grid positions and
//! extents, directions, move requests, status events, and the pure
//! coordinate predicates used to validate them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod direction;
pub mod error;
pub mod event;
pub mod position;
pub mod request;

pub use coord::{is_non_negative_integer, is_positive_integer, is_within_grid};
pub use direction::Direction;
pub use error::{CoordError, ParseDirectionError};
pub use event::{LogEvent, LogLevel, Notice, PositionEvent, StatusEvent, StatusKind};
pub use position::{GridExtent, GridPosition};
pub use request::MoveRequest;
