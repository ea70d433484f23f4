//! User storage port

use async_trait::async_trait;
use domain::{EmailAddress, User, UserId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for user storage operations
///
/// A saved user carries all of its memberships; loading returns the same
/// tenant to role-set mapping. Email uniqueness violations are reported as
/// [`ApplicationError::Conflict`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or update a user together with its memberships
    async fn save(&self, user: &User) -> Result<(), ApplicationError>;

    /// Get a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, ApplicationError>;

    /// Get a user by email address
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, ApplicationError>;
}
