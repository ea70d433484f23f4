//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
///
/// Every variant is a construction-time validation failure. Aggregates and
/// value objects raise nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Invalid email address format
    #[error("Invalid email address: {0}")]
    InvalidEmailAddress(String),

    /// Malformed or nil identifier
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Check if this error is a validation failure
    ///
    /// Every current variant is a validation failure.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidEmailAddress(_) | Self::InvalidIdentifier(_) | Self::ValidationError(_)
        )
    }
}
