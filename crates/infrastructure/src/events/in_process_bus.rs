//! Synchronous in-process event bus
//!
//! Listeners run on the publishing task, in subscription order. A publish
//! returns once every listener has run. Nothing is persisted.

use std::sync::Arc;

use application::ports::EventSink;
use domain::TenantRegisteredEvent;
use parking_lot::RwLock;
use tracing::{debug, instrument};

/// Receiver of domain events published on the bus
pub trait EventListener: Send + Sync {
    /// Handle a tenant registration
    fn on_tenant_registered(&self, event: &TenantRegisteredEvent);
}

/// Fan-out of domain events to registered listeners
#[derive(Default)]
pub struct InProcessEventBus {
    listeners: RwLock<Vec<Arc<dyn EventListener>>>,
}

impl std::fmt::Debug for InProcessEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InProcessEventBus")
            .field("listeners", &self.listeners.read().len())
            .finish()
    }
}

impl InProcessEventBus {
    /// Create a bus without listeners
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for all subsequent publications
    pub fn subscribe(&self, listener: Arc<dyn EventListener>) {
        self.listeners.write().push(listener);
    }
}

impl EventSink for InProcessEventBus {
    #[instrument(skip(self, event), fields(tenant_id = %event.tenant_id))]
    fn publish(&self, event: &TenantRegisteredEvent) {
        // Snapshot so a listener may subscribe without deadlocking
        let listeners = self.listeners.read().clone();
        debug!(listeners = listeners.len(), "Publishing TenantRegisteredEvent");

        for listener in &listeners {
            listener.on_tenant_registered(event);
        }
    }
}
