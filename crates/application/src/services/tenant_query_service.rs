//! Tenant Query Service - Tenant details composed from stored rows

use std::{collections::HashSet, sync::Arc};

use domain::{TenantId, decode_roles};
use tracing::{debug, instrument};

use crate::{
    dto::{Member, TenantDetails},
    error::ApplicationError,
    ports::TenantReadModelPort,
};

/// Read-only service for tenant views
pub struct TenantQueryService {
    read_model: Arc<dyn TenantReadModelPort>,
}

impl std::fmt::Debug for TenantQueryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantQueryService").finish_non_exhaustive()
    }
}

impl TenantQueryService {
    /// Create a new query service
    pub fn new(read_model: Arc<dyn TenantReadModelPort>) -> Self {
        Self { read_model }
    }

    /// Get a tenant and its members
    ///
    /// Members appear in row order. When a user shows up in more than one
    /// row, the first row wins.
    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn get_tenant_details(
        &self,
        tenant_id: &TenantId,
    ) -> Result<TenantDetails, ApplicationError> {
        let tenant = self
            .read_model
            .find_tenant(tenant_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("Tenant not found: {tenant_id}")))?;

        let rows = self.read_model.find_memberships(tenant_id).await?;
        debug!(rows = rows.len(), "Loaded membership rows");

        let mut seen = HashSet::new();
        let members = rows
            .into_iter()
            .filter(|row| seen.insert(row.user_email.clone()))
            .map(|row| Member {
                roles: decode_roles(&row.roles)
                    .into_iter()
                    .map(|role| role.name().to_owned())
                    .collect(),
                email: row.user_email,
            })
            .collect();

        Ok(TenantDetails {
            id: tenant.id,
            name: tenant.name,
            status: tenant.status,
            created_at: tenant.created_at,
            members,
        })
    }
}
