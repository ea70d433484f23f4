//! Read-side port for tenant detail queries
//!
//! Serves rows straight from storage. Aggregates are never rehydrated here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{TenantId, TenantStatus};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A stored tenant row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantRow {
    /// Tenant ID
    pub id: TenantId,
    /// Tenant name
    pub name: String,
    /// Stored status
    pub status: TenantStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A stored membership row joined with its user's email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipRow {
    /// Email of the member
    pub user_email: String,
    /// Tenant the membership belongs to
    pub tenant_id: TenantId,
    /// Encoded role set, see [`domain::encode_roles`]
    pub roles: String,
}

/// Port for reading tenant and membership rows
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TenantReadModelPort: Send + Sync {
    /// Get the tenant row by ID
    async fn find_tenant(&self, id: &TenantId) -> Result<Option<TenantRow>, ApplicationError>;

    /// Get all membership rows of a tenant
    async fn find_memberships(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Vec<MembershipRow>, ApplicationError>;
}
