//! Event notification port

use domain::TenantRegisteredEvent;
#[cfg(test)]
use mockall::automock;

/// Local, synchronous delivery of domain events
///
/// `publish` returns once every subscriber has run. Delivery is not durable.
#[cfg_attr(test, automock)]
pub trait EventSink: Send + Sync {
    /// Deliver a tenant-registered event to all subscribers
    fn publish(&self, event: &TenantRegisteredEvent);
}
