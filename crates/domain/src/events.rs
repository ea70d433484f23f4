//! Domain events - Facts published after a state change is persisted

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{entities::Tenant, value_objects::TenantId};

/// A tenant was registered and saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRegisteredEvent {
    /// ID of the new tenant
    pub tenant_id: TenantId,
    /// Name of the new tenant
    pub name: String,
    /// When the event was raised
    pub occurred_on: DateTime<Utc>,
}

impl TenantRegisteredEvent {
    /// Build the event for a freshly registered tenant
    #[must_use]
    pub fn for_tenant(tenant: &Tenant) -> Self {
        Self {
            tenant_id: tenant.id(),
            name: tenant.name().to_owned(),
            occurred_on: Utc::now(),
        }
    }
}
