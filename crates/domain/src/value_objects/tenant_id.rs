//! Tenant identifier value object
//!
//! # Examples
//!
//! ```
//! use domain::TenantId;
//!
//! // Generate a new random tenant ID
//! let tenant_id = TenantId::new();
//! assert!(!tenant_id.to_string().is_empty());
//!
//! // Parse from string
//! let parsed = TenantId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
//! assert_eq!(parsed.to_string(), "550e8400-e29b-41d4-a716-446655440000");
//!
//! // The nil UUID is never a valid tenant
//! assert!(TenantId::parse("00000000-0000-0000-0000-000000000000").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// A unique tenant identifier
///
/// Tenants are organizational units that users join through memberships.
/// Other aggregates refer to a tenant only through this identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct TenantId(Uuid);

impl TenantId {
    /// Generate a new random tenant ID
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::TenantId;
    ///
    /// let id1 = TenantId::new();
    /// let id2 = TenantId::new();
    /// assert_ne!(id1, id2);
    /// ```
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a tenant ID from an existing UUID
    ///
    /// # Errors
    ///
    /// Returns an error if the UUID is nil.
    pub fn from_uuid(uuid: Uuid) -> Result<Self, DomainError> {
        if uuid.is_nil() {
            return Err(DomainError::InvalidIdentifier(
                "TenantId value cannot be nil".to_string(),
            ));
        }
        Ok(Self(uuid))
    }

    /// Parse a tenant ID from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::TenantId;
    ///
    /// assert!(TenantId::parse("550e8400-e29b-41d4-a716-446655440000").is_ok());
    /// assert!(TenantId::parse("invalid").is_err());
    /// assert!(TenantId::parse("").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a UUID or is the nil UUID.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let uuid = Uuid::parse_str(s.trim())
            .map_err(|e| DomainError::InvalidIdentifier(format!("TenantId '{s}': {e}")))?;
        Self::from_uuid(uuid)
    }

    /// Get the underlying UUID
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TenantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Uuid> for TenantId {
    type Error = DomainError;

    fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
        Self::from_uuid(uuid)
    }
}

impl From<TenantId> for Uuid {
    fn from(id: TenantId) -> Self {
        id.0
    }
}
