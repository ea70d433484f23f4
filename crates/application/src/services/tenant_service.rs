//! Tenant Service - Tenant registration

use std::sync::Arc;

use domain::{Tenant, TenantId, TenantRegisteredEvent};
use tracing::{debug, info, instrument, warn};

use crate::{
    dto::{RegisterTenantCommand, TenantResponse},
    error::ApplicationError,
    ports::{EventSink, TenantRepository},
};

/// Service for tenant use cases
pub struct TenantApplicationService {
    tenants: Arc<dyn TenantRepository>,
    events: Arc<dyn EventSink>,
}

impl std::fmt::Debug for TenantApplicationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantApplicationService").finish_non_exhaustive()
    }
}

impl TenantApplicationService {
    /// Create a new tenant service
    pub fn new(tenants: Arc<dyn TenantRepository>, events: Arc<dyn EventSink>) -> Self {
        Self { tenants, events }
    }

    /// Register a tenant under a name nobody uses yet
    ///
    /// The event is published only after the tenant has been saved.
    #[instrument(skip(self, command), fields(tenant_name = %command.name))]
    pub async fn register_tenant(
        &self,
        command: RegisterTenantCommand,
    ) -> Result<TenantResponse, ApplicationError> {
        if self.tenants.exists_by_name(&command.name).await? {
            warn!("Tenant name already taken");
            return Err(ApplicationError::Conflict(format!(
                "Tenant with name '{}' already exists",
                command.name
            )));
        }

        let tenant = Tenant::register(TenantId::new(), command.name)?;
        self.tenants.save(&tenant).await?;

        debug!(contact_email = %command.contact_email, "Publishing tenant registration");
        self.events.publish(&TenantRegisteredEvent::for_tenant(&tenant));

        info!(tenant_id = %tenant.id(), "Tenant registered");
        Ok(TenantResponse::from(&tenant))
    }
}
