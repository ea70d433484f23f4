//! Tenant storage port
//!
//! Defines the interface for tenant persistence.

use async_trait::async_trait;
use domain::{Tenant, TenantId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for tenant storage operations
///
/// Implementations must enforce tenant name uniqueness themselves and report
/// a violation as [`ApplicationError::Conflict`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Insert or update a tenant
    async fn save(&self, tenant: &Tenant) -> Result<(), ApplicationError>;

    /// Get a tenant by ID
    async fn find_by_id(&self, id: &TenantId) -> Result<Option<Tenant>, ApplicationError>;

    /// Check whether a tenant with this exact name exists
    async fn exists_by_name(&self, name: &str) -> Result<bool, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn TenantRepository) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn TenantRepository>();
    }
}
