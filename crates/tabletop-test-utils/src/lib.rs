//! Test utilities for Tabletop development.
//!
//! Provides an [`EventRecorder`] that captures everything a stream
//! delivers, plus fixture movement policies in [`fixtures`] for driving
//! the engine down paths the built-in policies never take.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::{Arc, Mutex, PoisonError};

use tabletop_core::{GridPosition, StatusEvent, StatusKind};

/// Thread-safe sink for stream events.
///
/// Clones share the same buffer. Hand [`handler()`](EventRecorder::handler)
/// to a `subscribe` call, then inspect what arrived.
pub struct EventRecorder<E> {
    events: Arc<Mutex<Vec<E>>>,
}

impl<E> Clone for EventRecorder<E> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<E> Default for EventRecorder<E> {
    fn default() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<E: Clone + Send + 'static> EventRecorder<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A subscriber callback that appends every event to this recorder.
    pub fn handler(&self) -> impl Fn(&E) + Send + Sync + 'static {
        let events = Arc::clone(&self.events);
        move |event: &E| {
            events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event.clone());
        }
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<E> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent event.
    pub fn last(&self) -> Option<E> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl EventRecorder<StatusEvent> {
    /// Kinds of the recorded status events, in arrival order.
    pub fn kinds(&self) -> Vec<StatusKind> {
        self.events().iter().map(StatusEvent::kind).collect()
    }

    /// Destinations of the recorded position events, in arrival order.
    pub fn positions(&self) -> Vec<GridPosition> {
        self.events()
            .iter()
            .filter_map(|e| e.as_position().map(|p| p.to))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletop_core::{Notice, PositionEvent};

    #[test]
    fn handler_records_into_shared_buffer() {
        let recorder = EventRecorder::<u8>::new();
        let handler = recorder.handler();
        handler(&1);
        handler(&2);
        assert_eq!(recorder.events(), vec![1, 2]);
        assert_eq!(recorder.clone().last(), Some(2));
        recorder.clear();
        assert!(recorder.is_empty());
    }

    #[test]
    fn status_helpers_project_events() {
        let recorder = EventRecorder::<StatusEvent>::new();
        let handler = recorder.handler();
        handler(&StatusEvent::from(Notice::RobotReady));
        handler(&StatusEvent::from(PositionEvent {
            from: GridPosition::new(0, 0),
            to: GridPosition::new(0, 1),
            direction: None,
        }));
        assert_eq!(recorder.kinds(), vec![StatusKind::Info, StatusKind::Position]);
        assert_eq!(recorder.positions(), vec![GridPosition::new(0, 1)]);
    }
}
