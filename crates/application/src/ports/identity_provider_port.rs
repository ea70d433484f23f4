//! External identity provider port
//!
//! The provider owns credentials. This core only hands the credential over
//! once and keeps the opaque reference it gets back.

use async_trait::async_trait;
use domain::EmailAddress;
#[cfg(test)]
use mockall::automock;
use secrecy::SecretString;

use crate::error::ApplicationError;

/// Port for creating accounts at the identity provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityProviderPort: Send + Sync {
    /// Create an account and return the provider's reference for it
    ///
    /// Fails with [`ApplicationError::ExternalProvider`] when the provider
    /// rejects the account or cannot be reached. No retry is attempted.
    async fn register_user(
        &self,
        username: &str,
        email: &EmailAddress,
        credential: &SecretString,
    ) -> Result<String, ApplicationError>;
}
