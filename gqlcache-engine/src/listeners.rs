//! Listener registry.
//!
//! Each cache owns one registry. Listeners run synchronously, in
//! registration order, after every successful write. The callback list is
//! copied before fan-out, so a listener registered from inside a callback
//! is not invoked for the write in progress.

use gqlcache_model::Entity;
use gqlcache_types::EntityKey;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::trace;

/// Witness set: identity → current stored entity.
pub type Objects = BTreeMap<EntityKey, Entity>;

type Callback = Arc<dyn Fn(&Objects) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Callback)>,
}

/// Ordered set of active listeners for one cache instance.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback. The returned handle removes exactly this
    /// callback; dropping the handle leaves it registered.
    pub fn listen<F>(&self, callback: F) -> Unlisten
    where
        F: Fn(&Objects) + Send + Sync + 'static,
    {
        let mut registry = self.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(callback)));
        trace!(listener = id, active = registry.listeners.len(), "listener registered");

        Unlisten {
            registry: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Invokes every active listener once with `objects`.
    pub fn notify(&self, objects: &Objects) {
        let callbacks: Vec<Callback> = self
            .lock()
            .listeners
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for callback in callbacks {
            callback(objects);
        }
    }

    /// Number of active listeners.
    pub fn len(&self) -> usize {
        self.lock().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        // Callbacks never run under the lock; a poisoned list is still intact.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("active", &self.len())
            .finish()
    }
}

/// Handle returned by [`ListenerRegistry::listen`].
#[derive(Debug, Clone)]
pub struct Unlisten {
    registry: Weak<Mutex<Registry>>,
    id: u64,
}

impl Unlisten {
    /// Removes the listener. Idempotent: later calls are no-ops and never
    /// touch other listeners. Returns true only on the call that removed it.
    pub fn unlisten(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
        let before = registry.listeners.len();
        registry.listeners.retain(|(id, _)| *id != self.id);
        let removed = registry.listeners.len() != before;
        if removed {
            trace!(listener = self.id, "listener removed");
        }
        removed
    }
}
