//! User aggregate - An identity linked to an external provider account
//!
//! A user holds at most one [`TenantMembership`] per tenant. Memberships are
//! only reachable through read-only accessors; [`User::add_to_tenant`] is the
//! single mutator.

use std::collections::{BTreeSet, HashMap, hash_map::Entry};

use crate::{
    entities::TenantMembership,
    value_objects::{EmailAddress, Role, TenantId, UserId},
};

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    external_id: String,
    email: EmailAddress,
    memberships: HashMap<TenantId, TenantMembership>,
}

impl User {
    /// Register a new user without memberships
    ///
    /// `external_id` is the reference issued by the identity provider.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::{EmailAddress, Role, TenantId, User, UserId};
    ///
    /// let email = EmailAddress::new("john@example.com").unwrap();
    /// let mut user = User::register(UserId::new(), "ext-999", email);
    /// let tenant = TenantId::new();
    ///
    /// user.add_to_tenant(tenant, Role::ADMIN);
    /// assert!(user.roles_for_tenant(&tenant).contains(&Role::ADMIN));
    /// ```
    #[must_use]
    pub fn register(id: UserId, external_id: impl Into<String>, email: EmailAddress) -> Self {
        Self {
            id,
            external_id: external_id.into(),
            email,
            memberships: HashMap::new(),
        }
    }

    /// Get the user ID
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Get the identity provider reference
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    /// Get the email address
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Grant a role in a tenant
    ///
    /// Creates the membership on first grant; granting a held role is a no-op.
    pub fn add_to_tenant(&mut self, tenant_id: TenantId, role: Role) {
        match self.memberships.entry(tenant_id) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().add_role(role);
            },
            Entry::Vacant(entry) => {
                entry.insert(TenantMembership::new(tenant_id, role));
            },
        }
    }

    /// Snapshot of the roles held in a tenant, empty when not a member
    pub fn roles_for_tenant(&self, tenant_id: &TenantId) -> BTreeSet<Role> {
        self.memberships
            .get(tenant_id)
            .map(|membership| membership.roles().clone())
            .unwrap_or_default()
    }

    /// Membership in a tenant, if any
    pub fn membership(&self, tenant_id: &TenantId) -> Option<&TenantMembership> {
        self.memberships.get(tenant_id)
    }

    /// All memberships, in no particular order
    pub fn memberships(&self) -> impl Iterator<Item = &TenantMembership> {
        self.memberships.values()
    }

    /// Check whether the user belongs to a tenant
    pub fn is_member_of(&self, tenant_id: &TenantId) -> bool {
        self.memberships.contains_key(tenant_id)
    }
}
