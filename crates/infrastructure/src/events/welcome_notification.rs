//! Welcome notification for newly registered tenants
//!
//! Delivery is a structured log entry; sent notifications are kept in memory
//! so callers can inspect them.

use chrono::{DateTime, Utc};
use domain::{TenantId, TenantRegisteredEvent};
use parking_lot::Mutex;
use tracing::info;

use super::EventListener;

/// A welcome notification that was sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeNotification {
    /// Tenant that was welcomed
    pub tenant_id: TenantId,
    /// Tenant name at registration time
    pub tenant_name: String,
    /// When the notification was sent
    pub sent_at: DateTime<Utc>,
}

/// Sends a welcome notification for every registered tenant
#[derive(Debug, Default)]
pub struct WelcomeNotificationListener {
    sent: Mutex<Vec<WelcomeNotification>>,
}

impl WelcomeNotificationListener {
    /// Create a listener with no sent notifications
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications sent so far, oldest first
    pub fn sent(&self) -> Vec<WelcomeNotification> {
        self.sent.lock().clone()
    }
}

impl EventListener for WelcomeNotificationListener {
    fn on_tenant_registered(&self, event: &TenantRegisteredEvent) {
        info!(
            tenant_id = %event.tenant_id,
            tenant_name = %event.name,
            "Sending welcome notification to new tenant"
        );

        self.sent.lock().push(WelcomeNotification {
            tenant_id: event.tenant_id,
            tenant_name: event.name.clone(),
            sent_at: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use application::ports::EventSink;
    use domain::Tenant;

    use super::*;
    use crate::events::InProcessEventBus;

    #[test]
    fn records_notification_per_event() {
        let listener = WelcomeNotificationListener::new();
        let tenant = Tenant::register(TenantId::new(), "Acme Corp").unwrap();

        listener.on_tenant_registered(&TenantRegisteredEvent::for_tenant(&tenant));

        let sent = listener.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].tenant_id, tenant.id());
        assert_eq!(sent[0].tenant_name, "Acme Corp");
    }

    #[test]
    fn receives_events_through_bus() {
        let listener = Arc::new(WelcomeNotificationListener::new());
        let bus = InProcessEventBus::new();
        bus.subscribe(listener.clone());

        let tenant = Tenant::register(TenantId::new(), "Globex").unwrap();
        bus.publish(&TenantRegisteredEvent::for_tenant(&tenant));

        assert_eq!(listener.sent().len(), 1);
    }
}
