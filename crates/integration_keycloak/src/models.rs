//! Keycloak request and response models

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Account to create
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login name
    pub username: String,
    /// Email address
    pub email: String,
    /// Initial, non-temporary password
    pub password: SecretString,
}

impl NewUser {
    /// Create a new account request
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password,
        }
    }
}

/// Keycloak `UserRepresentation`, limited to the fields we send
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserRepresentation<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub enabled: bool,
    pub email_verified: bool,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub credentials: [CredentialRepresentation<'a>; 1],
}

/// Keycloak `CredentialRepresentation`
#[derive(Serialize)]
pub(crate) struct CredentialRepresentation<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub value: &'a str,
    pub temporary: bool,
}

impl<'a> UserRepresentation<'a> {
    /// Enabled, email-verified account with a single password credential
    ///
    /// Keycloak requires first and last name by default; the username and a
    /// fixed last name are used.
    pub(crate) fn from_new_user(user: &'a NewUser) -> Self {
        Self {
            username: &user.username,
            email: &user.email,
            enabled: true,
            email_verified: true,
            first_name: &user.username,
            last_name: "User",
            credentials: [CredentialRepresentation {
                kind: "password",
                value: user.password.expose_secret(),
                temporary: false,
            }],
        }
    }
}

/// Token endpoint response
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}
