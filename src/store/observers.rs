//! Observer registry shared by the store implementations.

use super::{Observer, Pet};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Registered observers keyed by a monotonically assigned id.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    observers: RwLock<HashMap<u64, Observer>>,
    next_id: AtomicU64,
}

impl ObserverRegistry {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            observers: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        })
    }

    /// Register an observer and seed it with the current snapshot.
    ///
    /// The callback runs once with `current` before it is registered, so a
    /// change racing with registration is delivered by the next broadcast.
    pub(crate) fn subscribe(self: &Arc<Self>, observer: Observer, current: &[Pet]) -> Subscription {
        observer(current);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.observers.write().insert(id, observer);
        Subscription {
            id,
            registry: Arc::downgrade(self),
        }
    }

    /// Broadcast a snapshot to every registered observer.
    ///
    /// Callers must not hold the store's data lock; observers may read the
    /// snapshot slice but must not subscribe or unsubscribe from inside the
    /// callback.
    pub(crate) fn notify(&self, snapshot: &[Pet]) {
        let observers = self.observers.read();
        for observer in observers.values() {
            observer(snapshot);
        }
    }

    fn unregister(&self, id: u64) {
        self.observers.write().remove(&id);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.observers.read().len()
    }
}

/// Handle scoping an observer registration.
///
/// Dropping the handle releases the observer; the registry never invokes a
/// released callback again.
pub struct Subscription {
    id: u64,
    registry: Weak<ObserverRegistry>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.unregister(self.id);
        }
    }
}
