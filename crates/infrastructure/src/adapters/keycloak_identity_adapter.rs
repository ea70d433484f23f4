//! Keycloak adapter - Implements IdentityProviderPort using integration_keycloak

use std::sync::Arc;

use application::{error::ApplicationError, ports::IdentityProviderPort};
use async_trait::async_trait;
use domain::EmailAddress;
use integration_keycloak::{IdentityClient, KeycloakClient, KeycloakConfig, KeycloakError, NewUser};
use secrecy::SecretString;
use tracing::{debug, instrument};

/// Adapter creating user accounts in Keycloak
pub struct KeycloakIdentityAdapter {
    client: Arc<dyn IdentityClient>,
}

impl std::fmt::Debug for KeycloakIdentityAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeycloakIdentityAdapter")
            .field("client", &"IdentityClient")
            .finish()
    }
}

impl KeycloakIdentityAdapter {
    /// Create an adapter talking to the configured Keycloak server
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: KeycloakConfig) -> Result<Self, ApplicationError> {
        let client = KeycloakClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter over an existing client
    #[must_use]
    pub fn with_client(client: Arc<dyn IdentityClient>) -> Self {
        Self { client }
    }

    /// Every client failure is an external provider error, message kept verbatim
    fn map_error(err: KeycloakError) -> ApplicationError {
        ApplicationError::ExternalProvider(err.to_string())
    }
}

#[async_trait]
impl IdentityProviderPort for KeycloakIdentityAdapter {
    #[instrument(skip(self, credential), fields(email = %email))]
    async fn register_user(
        &self,
        username: &str,
        email: &EmailAddress,
        credential: &SecretString,
    ) -> Result<String, ApplicationError> {
        let user = NewUser::new(username, email.as_str(), credential.clone());
        let external_id = self.client.create_user(&user).await.map_err(Self::map_error)?;

        debug!(external_id = %external_id, "Created Keycloak account");
        Ok(external_id)
    }
}
