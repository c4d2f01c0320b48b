//! Grid engine for the Tabletop robot simulator.
//!
//! Provides [`GridEngine`], which owns the grid dimensions, the robot's
//! position, and the active movement policy, and publishes every outcome
//! on a replaying [`EventStream`] that renderers and status readouts
//! subscribe to.
//!
//! Everything is synchronous: `move_robot` and `set_position` run to
//! completion, and every subscriber has seen the resulting event before
//! they return.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod metrics;
pub mod readout;
pub mod stream;

pub use config::{ConfigError, GridConfig};
pub use engine::{GridEngine, MoveOutcome};
pub use metrics::EngineMetrics;
pub use readout::{NoticeTimeouts, StatusBoard};
pub use stream::{EventStream, Subscription, SubscriptionGuard, SubscriptionId};
