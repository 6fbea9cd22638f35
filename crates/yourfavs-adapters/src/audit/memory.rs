//! In-memory audit adapter for testing and batch reports.

use std::sync::{Arc, RwLock};

use yourfavs_core::application::ports::{RedirectAudit, RedirectEvent};

/// Records every event it receives. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryAudit {
    inner: Arc<RwLock<Vec<RedirectEvent>>>,
}

impl MemoryAudit {
    /// Create a new empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first.
    pub fn events(&self) -> Vec<RedirectEvent> {
        self.inner
            .read()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        if let Ok(mut events) = self.inner.write() {
            events.clear();
        }
    }
}

impl RedirectAudit for MemoryAudit {
    fn record(&self, event: &RedirectEvent) {
        // A poisoned lock drops the event; auditing never affects the redirect.
        if let Ok(mut events) = self.inner.write() {
            events.push(event.clone());
        }
    }
}
