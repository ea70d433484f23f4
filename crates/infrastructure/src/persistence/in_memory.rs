//! In-memory repositories for development and tests
//!
//! Same contracts as the SQLite adapters: tenant names and user emails are
//! unique, checked under the write lock, and violations are reported as
//! conflicts. Stored aggregates are copies; callers never share state with
//! the store.

use std::{collections::HashMap, sync::Arc};

use application::{
    error::ApplicationError,
    ports::{MembershipRow, TenantReadModelPort, TenantRepository, TenantRow, UserRepository},
};
use async_trait::async_trait;
use domain::{EmailAddress, Tenant, TenantId, User, UserId, encode_roles};
use parking_lot::RwLock;
use tracing::{debug, instrument};

/// In-memory tenant repository
#[derive(Debug, Default)]
pub struct InMemoryTenantRepository {
    tenants: RwLock<HashMap<TenantId, Tenant>>,
}

impl InMemoryTenantRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
    #[instrument(skip(self, tenant), fields(tenant_id = %tenant.id()))]
    async fn save(&self, tenant: &Tenant) -> Result<(), ApplicationError> {
        let mut tenants = self.tenants.write();

        let taken = tenants
            .values()
            .any(|other| other.id() != tenant.id() && other.name() == tenant.name());
        if taken {
            return Err(ApplicationError::Conflict(format!(
                "Tenant with name '{}' already exists",
                tenant.name()
            )));
        }

        tenants.insert(tenant.id(), tenant.clone());
        debug!("Saved tenant");
        Ok(())
    }

    async fn find_by_id(&self, id: &TenantId) -> Result<Option<Tenant>, ApplicationError> {
        Ok(self.tenants.read().get(id).cloned())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, ApplicationError> {
        Ok(self.tenants.read().values().any(|t| t.name() == name))
    }
}

/// In-memory user repository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership rows of a tenant, sorted by email
    fn membership_rows(&self, tenant_id: &TenantId) -> Vec<MembershipRow> {
        let users = self.users.read();
        let mut rows: Vec<MembershipRow> = users
            .values()
            .filter_map(|user| {
                user.membership(tenant_id).map(|membership| MembershipRow {
                    user_email: user.email().as_str().to_owned(),
                    tenant_id: *tenant_id,
                    roles: encode_roles(membership.roles()),
                })
            })
            .collect();
        rows.sort_by(|a, b| a.user_email.cmp(&b.user_email));
        rows
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self, user), fields(user_id = %user.id()))]
    async fn save(&self, user: &User) -> Result<(), ApplicationError> {
        let mut users = self.users.write();

        let taken = users
            .values()
            .any(|other| other.id() != user.id() && other.email() == user.email());
        if taken {
            return Err(ApplicationError::Conflict(format!(
                "Email already in use: {}",
                user.email()
            )));
        }

        users.insert(user.id(), user.clone());
        debug!("Saved user");
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, ApplicationError> {
        Ok(self.users.read().get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, ApplicationError> {
        Ok(self
            .users
            .read()
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }
}

/// Read model over the in-memory repositories
#[derive(Debug, Clone)]
pub struct InMemoryTenantReadModel {
    tenants: Arc<InMemoryTenantRepository>,
    users: Arc<InMemoryUserRepository>,
}

impl InMemoryTenantReadModel {
    /// Create a read model over the given repositories
    #[must_use]
    pub const fn new(
        tenants: Arc<InMemoryTenantRepository>,
        users: Arc<InMemoryUserRepository>,
    ) -> Self {
        Self { tenants, users }
    }
}

#[async_trait]
impl TenantReadModelPort for InMemoryTenantReadModel {
    async fn find_tenant(&self, id: &TenantId) -> Result<Option<TenantRow>, ApplicationError> {
        Ok(self.tenants.tenants.read().get(id).map(|tenant| TenantRow {
            id: tenant.id(),
            name: tenant.name().to_owned(),
            status: tenant.status(),
            created_at: tenant.created_at(),
        }))
    }

    async fn find_memberships(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Vec<MembershipRow>, ApplicationError> {
        Ok(self.users.membership_rows(tenant_id))
    }
}
