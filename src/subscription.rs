//! Scoped global pointer-down subscriptions.
//!
//! A select that wants outside-click detection subscribes its container ID
//! for the duration of its mounted lifetime. The returned handle deregisters
//! on drop, so the observer list can never outlive the widget that needs it.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, Weak};

/// Registry of element IDs observing every pointer-down event.
#[derive(Debug, Clone, Default)]
pub struct PointerRegistry {
    inner: Arc<Mutex<BTreeSet<String>>>,
}

impl PointerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for the lifetime of the returned handle.
    pub fn subscribe(&self, id: impl Into<String>) -> PointerSubscription {
        let id = id.into();
        if let Ok(mut guard) = self.inner.lock() {
            guard.insert(id.clone());
        }
        log::debug!("[pointer] subscribed {id}");
        PointerSubscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Snapshot of the currently subscribed observer IDs, in sorted order.
    pub fn observers(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|guard| guard.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle holding one observer registration. Dropping it deregisters.
#[derive(Debug)]
pub struct PointerSubscription {
    id: String,
    registry: Weak<Mutex<BTreeSet<String>>>,
}

impl PointerSubscription {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            if let Ok(mut guard) = inner.lock() {
                guard.remove(&self.id);
            }
            log::debug!("[pointer] unsubscribed {}", self.id);
        }
    }
}
