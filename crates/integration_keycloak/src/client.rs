//! Keycloak admin client
//!
//! HTTP client for the user endpoints of the Keycloak admin REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::LOCATION};
use tracing::{debug, instrument};

use crate::{
    config::KeycloakConfig,
    error::KeycloakError,
    models::{NewUser, TokenResponse, UserRepresentation},
};

/// Identity client trait for creating accounts
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// Create an account and return its Keycloak ID
    async fn create_user(&self, user: &NewUser) -> Result<String, KeycloakError>;
}

/// Keycloak HTTP client implementation
#[derive(Debug)]
pub struct KeycloakClient {
    client: Client,
    config: KeycloakConfig,
}

impl KeycloakClient {
    /// Create a new Keycloak client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: KeycloakConfig) -> Result<Self, KeycloakError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| KeycloakError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the configuration
    #[must_use]
    pub const fn config(&self) -> &KeycloakConfig {
        &self.config
    }

    /// Log in as administrator and return a bearer token
    #[instrument(skip(self), fields(realm = %self.config.admin_realm))]
    async fn admin_token(&self) -> Result<String, KeycloakError> {
        let password = self.config.admin_password_str().ok_or_else(|| {
            KeycloakError::ConfigurationError("admin_password is not set".to_string())
        })?;

        let response = self
            .client
            .post(self.config.token_url())
            .form(&[
                ("grant_type", "password"),
                ("client_id", self.config.client_id.as_str()),
                ("username", self.config.admin_username.as_str()),
                ("password", password),
            ])
            .send()
            .await
            .map_err(|e| KeycloakError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(KeycloakError::AuthenticationFailed {
                status: status.as_u16(),
            });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| KeycloakError::ParseError(e.to_string()))?;

        Ok(token.access_token)
    }

    /// Extract the account ID from a `Location` header value
    ///
    /// The header looks like `.../admin/realms/<realm>/users/<id>`.
    fn id_from_location(location: &str) -> Option<&str> {
        location
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|id| !id.is_empty())
    }
}

#[async_trait]
impl IdentityClient for KeycloakClient {
    #[instrument(skip(self, user), fields(username = %user.username, realm = %self.config.realm))]
    async fn create_user(&self, user: &NewUser) -> Result<String, KeycloakError> {
        let token = self.admin_token().await?;
        let url = self.config.users_url();
        debug!(url = %url, "Creating Keycloak user");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&UserRepresentation::from_new_user(user))
            .send()
            .await
            .map_err(|e| KeycloakError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            return Err(KeycloakError::UserExists);
        }
        if status != StatusCode::CREATED {
            return Err(KeycloakError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(KeycloakError::MissingLocation)?;

        let id = Self::id_from_location(location).ok_or(KeycloakError::MissingLocation)?;
        debug!(keycloak_id = %id, "Keycloak user created");
        Ok(id.to_string())
    }
}
