//! Commands and response projections
//!
//! Commands arrive already deserialized; validation happens when the
//! services turn their fields into value objects.

use chrono::{DateTime, Utc};
use domain::{Tenant, TenantId, TenantStatus, User, UserId};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Register a new tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterTenantCommand {
    /// Unique tenant name
    pub name: String,
    /// Contact address carried for notifications only
    pub contact_email: String,
}

/// Register a new user at the identity provider and locally
#[derive(Debug, Deserialize)]
pub struct RegisterUserCommand {
    /// Username at the identity provider
    pub username: String,
    /// Email address, must be unique
    pub email: String,
    /// Initial password, handed to the provider and never stored
    pub password: SecretString,
}

/// Grant a role in a tenant to an existing user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteUserCommand {
    /// Tenant ID in its string form
    pub tenant_id: String,
    /// Email of the invited user
    pub email: String,
    /// Role name to grant
    pub role: String,
}

/// Tenant projection returned after registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantResponse {
    pub id: TenantId,
    pub name: String,
    pub status: TenantStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Tenant> for TenantResponse {
    fn from(tenant: &Tenant) -> Self {
        Self {
            id: tenant.id(),
            name: tenant.name().to_owned(),
            status: tenant.status(),
            created_at: tenant.created_at(),
        }
    }
}

/// User projection returned after registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub external_id: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            external_id: user.external_id().to_owned(),
            email: user.email().as_str().to_owned(),
        }
    }
}

/// A tenant member as seen by the query side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub email: String,
    /// Role names in ascending order
    pub roles: Vec<String>,
}

/// Tenant with its members
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantDetails {
    pub id: TenantId,
    pub name: String,
    pub status: TenantStatus,
    pub created_at: DateTime<Utc>,
    pub members: Vec<Member>,
}
