//! Keycloak integration
//!
//! Creates user accounts through the Keycloak admin REST API. The client
//! logs in with an administrator account (password grant against the admin
//! realm) and posts a user representation to the managed realm. Keycloak
//! answers `201 Created` with the new account's URL in the `Location` header;
//! the last path segment is the account ID.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_keycloak::{IdentityClient, KeycloakClient, KeycloakConfig, NewUser};
//!
//! let client = KeycloakClient::new(KeycloakConfig::default())?;
//! let id = client
//!     .create_user(&NewUser::new("john", "john@example.com", "s3cret".into()))
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{IdentityClient, KeycloakClient};
pub use config::KeycloakConfig;
pub use error::KeycloakError;
pub use models::NewUser;
