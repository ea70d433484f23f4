//! Email address value object with validation
//!
//! Provides a validated email address type that ensures proper format.
//! The address is kept exactly as given; two addresses are equal only when
//! their text is identical.
//!
//! # Examples
//!
//! ```
//! use domain::EmailAddress;
//!
//! // Create a valid email address
//! let email = EmailAddress::new("user@example.com").unwrap();
//! assert_eq!(email.as_str(), "user@example.com");
//!
//! // Invalid emails are rejected
//! assert!(EmailAddress::new("invalid").is_err());
//! assert!(EmailAddress::new("user@localhost").is_err());
//! ```

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[allow(clippy::expect_used)] // literal pattern, compiles
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("static email pattern should compile")
});

/// A validated email address
///
/// # Examples
///
/// ```
/// use domain::EmailAddress;
///
/// let email = EmailAddress::new("john@example.com").unwrap();
/// assert_eq!(email.as_str(), "john@example.com");
/// assert!(EmailAddress::new("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress {
    value: String,
}

impl EmailAddress {
    /// Create a new email address, validating the format
    ///
    /// # Errors
    ///
    /// Returns an error if the email does not match `local@domain.tld`.
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let value = email.into();

        if !EMAIL_PATTERN.is_match(&value) {
            return Err(DomainError::InvalidEmailAddress(value));
        }

        Ok(Self { value })
    }

    /// Get the email address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_is_accepted() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn email_is_kept_verbatim() {
        let email = EmailAddress::new("John.Doe+iam@Example.COM").unwrap();
        assert_eq!(email.as_str(), "John.Doe+iam@Example.COM");
    }

    #[test]
    fn invalid_email_is_rejected() {
        assert!(EmailAddress::new("not-an-email").is_err());
        assert!(EmailAddress::new("@nodomain.com").is_err());
        assert!(EmailAddress::new("noat.com").is_err());
        assert!(EmailAddress::new("user@domain").is_err());
        assert!(EmailAddress::new("user@domain.c").is_err());
        assert!(EmailAddress::new("").is_err());
    }

    #[test]
    fn surrounding_whitespace_is_rejected() {
        assert!(EmailAddress::new(" john@example.com").is_err());
        assert!(EmailAddress::new("john@example.com ").is_err());
    }

    #[test]
    fn rejection_carries_input() {
        let err = EmailAddress::new("bad").unwrap_err();
        assert_eq!(err, DomainError::InvalidEmailAddress("bad".to_string()));
    }

    #[test]
    fn try_from_str() {
        let email: EmailAddress = "test@example.com".try_into().unwrap();
        assert_eq!(email.as_str(), "test@example.com");
    }

    #[test]
    fn deserialization_validates() {
        let parsed: EmailAddress = serde_json::from_str("\"test@example.com\"").unwrap();
        assert_eq!(parsed.as_str(), "test@example.com");
        assert!(serde_json::from_str::<EmailAddress>("\"nope\"").is_err());
    }
}
