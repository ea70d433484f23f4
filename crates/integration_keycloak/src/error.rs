//! Keycloak error types

use thiserror::Error;

/// Errors that can occur while talking to Keycloak
#[derive(Debug, Error)]
pub enum KeycloakError {
    /// HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request did not complete (network error, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Admin login was rejected
    #[error("Authentication failed: HTTP {status}")]
    AuthenticationFailed {
        /// Status returned by the token endpoint
        status: u16,
    },

    /// An account with this username or email already exists
    #[error("User already exists in Keycloak")]
    UserExists,

    /// User creation answered with a status other than 201
    #[error("Failed to create user in Keycloak. Status: {status}")]
    UnexpectedStatus {
        /// Status returned by the user endpoint
        status: u16,
    },

    /// 201 response without a usable `Location` header
    #[error("Keycloak response has no user location")]
    MissingLocation,

    /// Failed to parse a Keycloak response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Client is missing required settings
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
