//! Ordered, synchronous publish/subscribe with replay of the latest event.
//!
//! [`EventStream`] is an explicit list of subscriber callbacks plus a
//! single "last event" slot:
//!
//! - `publish()` records the event as the latest, then invokes every
//!   registered handler synchronously, in subscription order, before
//!   returning.
//! - `subscribe()` registers a handler and immediately replays the latest
//!   event to it, so a late subscriber still observes the current state.
//!
//! # Re-entrancy
//!
//! Handlers run with the registry lock released. A handler may
//! unsubscribe itself (or any other subscription) or subscribe new
//! handlers; changes take effect from the next publish. Delivery of the
//! in-progress event to the handlers registered when it was published is
//! never affected.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use indexmap::IndexMap;
use smallvec::SmallVec;

type Handler<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Opaque identifier of one subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

struct Registry<E> {
    handlers: IndexMap<SubscriptionId, Handler<E>>,
    last: Option<E>,
    published: u64,
}

/// Type-erased view of a registry, so [`Subscription`] is not generic.
trait Detach: Send + Sync {
    fn detach(&self, id: SubscriptionId) -> bool;
    fn is_attached(&self, id: SubscriptionId) -> bool;
}

impl<E: Send> Detach for Mutex<Registry<E>> {
    fn detach(&self, id: SubscriptionId) -> bool {
        let mut registry = self.lock().unwrap_or_else(PoisonError::into_inner);
        // shift_remove keeps the remaining handlers in subscription order.
        registry.handlers.shift_remove(&id).is_some()
    }

    fn is_attached(&self, id: SubscriptionId) -> bool {
        let registry = self.lock().unwrap_or_else(PoisonError::into_inner);
        registry.handlers.contains_key(&id)
    }
}

/// A cloneable handle to a shared, replaying event stream.
///
/// Clones share the same subscriber list and latest-event slot.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use tabletop_engine::EventStream;
///
/// let stream = EventStream::new();
/// stream.publish("ready");
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let sub = stream.subscribe(move |e: &&str| sink.lock().unwrap().push(*e));
///
/// stream.publish("moved");
/// sub.unsubscribe();
/// stream.publish("ignored");
///
/// // The late subscriber got the replayed "ready" first.
/// assert_eq!(*seen.lock().unwrap(), vec!["ready", "moved"]);
/// ```
pub struct EventStream<E> {
    registry: Arc<Mutex<Registry<E>>>,
}

impl<E> Clone for EventStream<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<E: Clone + Send + 'static> Default for EventStream<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone + Send + 'static> EventStream<E> {
    /// Create an empty stream with no subscribers and no latest event.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                handlers: IndexMap::new(),
                last: None,
                published: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Registry<E>> {
        // A handler that panicked mid-publish never held the lock, but a
        // poisoned mutex must not take the publisher down with it.
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publish `event` to every current subscriber, in subscription order.
    ///
    /// Returns once every handler has run.
    pub fn publish(&self, event: E) {
        let handlers: SmallVec<[Handler<E>; 4]> = {
            let mut registry = self.lock();
            registry.last = Some(event.clone());
            registry.published += 1;
            registry.handlers.values().cloned().collect()
        };
        tracing::trace!(subscribers = handlers.len(), "publishing event");
        for handler in &handlers {
            handler(&event);
        }
    }

    /// Register `handler` and replay the latest event to it, if any.
    ///
    /// The returned [`Subscription`] unsubscribes explicitly; dropping it
    /// leaves the handler registered. Use
    /// [`detach_on_drop`](Subscription::detach_on_drop) for guard
    /// semantics.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let handler: Handler<E> = Arc::new(handler);
        let id = SubscriptionId::next();
        let replay = {
            let mut registry = self.lock();
            registry.handlers.insert(id, Arc::clone(&handler));
            registry.last.clone()
        };
        tracing::trace!(?id, replay = replay.is_some(), "subscribed");
        if let Some(event) = replay {
            handler(&event);
        }
        let registry: Arc<dyn Detach> = self.registry.clone();
        Subscription {
            id,
            registry: Arc::downgrade(&registry),
        }
    }

    /// A clone of the most recently published event.
    pub fn latest(&self) -> Option<E> {
        self.lock().last.clone()
    }

    /// Number of currently registered handlers.
    pub fn subscriber_count(&self) -> usize {
        self.lock().handlers.len()
    }

    /// Total number of events published on this stream.
    pub fn published_count(&self) -> u64 {
        self.lock().published
    }
}

impl<E> fmt::Debug for EventStream<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("EventStream")
            .field("subscribers", &registry.handlers.len())
            .field("published", &registry.published)
            .field("has_latest", &registry.last.is_some())
            .finish()
    }
}

/// Handle to one registered handler.
///
/// Holds only a weak reference to the stream, so an outstanding
/// subscription never keeps a dropped stream alive.
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<dyn Detach>,
}

impl Subscription {
    /// Identifier of this subscription.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Remove the handler from the stream.
    ///
    /// Idempotent. Returns `true` if this call removed it. Safe to call
    /// from inside any handler, including this subscription's own.
    pub fn unsubscribe(&self) -> bool {
        match self.registry.upgrade() {
            Some(registry) => registry.detach(self.id),
            None => false,
        }
    }

    /// Whether the handler is still registered with a live stream.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.is_attached(self.id))
    }

    /// Convert into a guard that unsubscribes when dropped.
    pub fn detach_on_drop(self) -> SubscriptionGuard {
        SubscriptionGuard { inner: self }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

/// A [`Subscription`] that unsubscribes on drop.
#[derive(Debug)]
pub struct SubscriptionGuard {
    inner: Subscription,
}

impl SubscriptionGuard {
    /// Identifier of the guarded subscription.
    pub fn id(&self) -> SubscriptionId {
        self.inner.id
    }

    /// Whether the guarded handler is still registered.
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        self.inner.unsubscribe();
    }
}
