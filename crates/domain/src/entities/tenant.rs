//! Tenant aggregate - An organization users belong to

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, value_objects::TenantId};

/// Lifecycle status of a tenant
///
/// `Pending` is part of the stored vocabulary but no transition produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenantStatus {
    /// Created, awaiting activation details
    Pending,
    /// Fully operational
    Active,
    /// Temporarily disabled
    Suspended,
}

impl TenantStatus {
    /// Stored and displayed name of the status
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Suspended => "SUSPENDED",
        }
    }
}

impl fmt::Display for TenantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TenantStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "ACTIVE" => Ok(Self::Active),
            "SUSPENDED" => Ok(Self::Suspended),
            other => Err(DomainError::validation(format!(
                "Unknown tenant status: {other}"
            ))),
        }
    }
}

/// A tenant (organization)
///
/// The name is unique across all tenants; the repository enforces that,
/// this type only rejects blank names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    id: TenantId,
    name: String,
    status: TenantStatus,
    created_at: DateTime<Utc>,
}

impl Tenant {
    /// Register a new tenant
    ///
    /// The tenant starts `Active` and is stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::{Tenant, TenantId, TenantStatus};
    ///
    /// let tenant = Tenant::register(TenantId::new(), "Acme Corp").unwrap();
    /// assert_eq!(tenant.status(), TenantStatus::Active);
    /// assert!(Tenant::register(TenantId::new(), "  ").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is blank.
    pub fn register(id: TenantId, name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Tenant name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            status: TenantStatus::Active,
            created_at: Utc::now(),
        })
    }

    /// Restore a tenant from storage
    #[must_use]
    pub const fn restore(
        id: TenantId,
        name: String,
        status: TenantStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            status,
            created_at,
        }
    }

    /// Get the tenant ID
    pub const fn id(&self) -> TenantId {
        self.id
    }

    /// Get the tenant name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current status
    pub const fn status(&self) -> TenantStatus {
        self.status
    }

    /// Get the creation timestamp
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Activate the tenant; a no-op when already active
    pub fn activate(&mut self) {
        if self.status == TenantStatus::Active {
            return;
        }
        self.status = TenantStatus::Active;
    }

    /// Suspend the tenant
    pub fn suspend(&mut self) {
        self.status = TenantStatus::Suspended;
    }

    /// Check if the tenant is active
    pub fn is_active(&self) -> bool {
        self.status == TenantStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_creates_active_tenant() {
        let before = Utc::now();
        let id = TenantId::new();
        let tenant = Tenant::register(id, "Acme Corp").unwrap();

        assert_eq!(tenant.id(), id);
        assert_eq!(tenant.name(), "Acme Corp");
        assert_eq!(tenant.status(), TenantStatus::Active);
        assert!(tenant.created_at() >= before);
        assert!(tenant.created_at() <= Utc::now());
    }

    #[test]
    fn register_rejects_blank_name() {
        assert!(Tenant::register(TenantId::new(), "").is_err());
        assert!(Tenant::register(TenantId::new(), "   ").is_err());
    }

    #[test]
    fn activate_is_idempotent() {
        let mut tenant = Tenant::register(TenantId::new(), "Acme Corp").unwrap();
        tenant.activate();
        assert_eq!(tenant.status(), TenantStatus::Active);
    }

    #[test]
    fn suspended_tenant_can_be_reactivated() {
        let mut tenant = Tenant::register(TenantId::new(), "Acme Corp").unwrap();
        tenant.suspend();
        assert_eq!(tenant.status(), TenantStatus::Suspended);

        tenant.suspend();
        assert_eq!(tenant.status(), TenantStatus::Suspended);

        tenant.activate();
        assert!(tenant.is_active());
    }

    #[test]
    fn pending_tenant_can_be_activated() {
        let mut tenant = Tenant::restore(
            TenantId::new(),
            "Legacy".to_string(),
            TenantStatus::Pending,
            Utc::now(),
        );
        tenant.activate();
        assert_eq!(tenant.status(), TenantStatus::Active);
    }

    #[test]
    fn activate_keeps_creation_date() {
        let mut tenant = Tenant::register(TenantId::new(), "Acme Corp").unwrap();
        let created = tenant.created_at();
        tenant.suspend();
        tenant.activate();
        assert_eq!(tenant.created_at(), created);
    }

    #[test]
    fn status_names_roundtrip() {
        for status in [
            TenantStatus::Pending,
            TenantStatus::Active,
            TenantStatus::Suspended,
        ] {
            assert_eq!(status.as_str().parse::<TenantStatus>().unwrap(), status);
        }
        assert!("active".parse::<TenantStatus>().is_err());
    }

    #[test]
    fn status_serializes_by_name() {
        let json = serde_json::to_string(&TenantStatus::Suspended).unwrap();
        assert_eq!(json, "\"SUSPENDED\"");
    }
}
