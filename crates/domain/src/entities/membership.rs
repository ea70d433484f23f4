//! Tenant membership - A user's role set within one tenant

use std::collections::BTreeSet;

use crate::value_objects::{Role, TenantId};

/// The roles a user holds in a single tenant
///
/// Owned by [`User`](super::User); the role set only grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantMembership {
    tenant_id: TenantId,
    roles: BTreeSet<Role>,
}

impl TenantMembership {
    /// Create a membership holding a single role
    pub(crate) fn new(tenant_id: TenantId, initial_role: Role) -> Self {
        let mut roles = BTreeSet::new();
        roles.insert(initial_role);
        Self { tenant_id, roles }
    }

    /// Add a role; returns `false` if it was already held
    pub(crate) fn add_role(&mut self, role: Role) -> bool {
        self.roles.insert(role)
    }

    /// Tenant this membership belongs to
    pub const fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    /// Roles held in the tenant
    pub const fn roles(&self) -> &BTreeSet<Role> {
        &self.roles
    }
}
