//! Tabletop: a single robot on a fixed rectangular grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tabletop sub-crates. For most users, adding `tabletop` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tabletop::prelude::*;
//!
//! let mut engine = GridEngine::new(
//!     GridConfig::default()
//!         .with_wall_behavior(WallBehavior::Wrap)
//!         .with_initial_position((0, 0)),
//! )
//! .unwrap();
//!
//! // The ready notice is replayed to late subscribers.
//! let _sub = engine.subscribe_to_status(|event| println!("{}", event.message()));
//!
//! assert_eq!(
//!     engine.move_robot(Direction::Up),
//!     MoveOutcome::Moved(GridPosition::new(0, 4)),
//! );
//! assert!(!engine.set_position((10, 10)));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tabletop-core` | Positions, directions, requests, status events |
//! | [`policy`] | `tabletop-policy` | The movement policy trait and built-in policies |
//! | [`engine`] | `tabletop-engine` | Grid engine, configuration, event stream, readout model |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`tabletop-core`).
///
/// [`types::GridPosition`], [`types::Direction`], [`types::MoveRequest`],
/// and the [`types::StatusEvent`] family, plus the coordinate predicates.
pub use tabletop_core as types;

/// Movement policies (`tabletop-policy`).
///
/// The [`policy::MovementPolicy`] trait is the extension point for custom
/// boundary behaviour.
pub use tabletop_policy as policy;

/// Grid engine (`tabletop-engine`).
///
/// [`engine::GridEngine`] and its [`engine::GridConfig`], the replaying
/// [`engine::EventStream`], and the [`engine::StatusBoard`] readout model.
pub use tabletop_engine as engine;

/// Common imports for typical Tabletop usage.
///
/// ```rust
/// use tabletop::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tabletop_core::{
        Direction, GridExtent, GridPosition, LogLevel, MoveRequest, Notice, PositionEvent,
        StatusEvent, StatusKind,
    };

    // Errors
    pub use tabletop_core::CoordError;
    pub use tabletop_engine::ConfigError;

    // Policies
    pub use tabletop_policy::{Adjudication, MovementPolicy, WallBehavior};

    // Engine
    pub use tabletop_engine::{
        EngineMetrics, EventStream, GridConfig, GridEngine, MoveOutcome, NoticeTimeouts,
        StatusBoard, Subscription,
    };
}
