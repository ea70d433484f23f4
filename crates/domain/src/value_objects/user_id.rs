//! User identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// A unique user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid")]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random user ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a user ID from an existing UUID
    ///
    /// # Errors
    ///
    /// Returns an error if the UUID is nil.
    pub fn from_uuid(uuid: Uuid) -> Result<Self, DomainError> {
        if uuid.is_nil() {
            return Err(DomainError::InvalidIdentifier(
                "UserId value cannot be nil".to_string(),
            ));
        }
        Ok(Self(uuid))
    }

    /// Parse a user ID from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a UUID or is the nil UUID.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let uuid = Uuid::parse_str(s.trim())
            .map_err(|e| DomainError::InvalidIdentifier(format!("UserId '{s}': {e}")))?;
        Self::from_uuid(uuid)
    }

    /// Get the underlying UUID
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Uuid> for UserId {
    type Error = DomainError;

    fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
        Self::from_uuid(uuid)
    }
}
