//! Keycloak client configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Connection and admin login settings for Keycloak
#[derive(Clone, Serialize, Deserialize)]
pub struct KeycloakConfig {
    /// Keycloak base URL, without trailing slash
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Realm user accounts are created in
    #[serde(default = "default_realm")]
    pub realm: String,

    /// Realm the administrator logs in to
    #[serde(default = "default_admin_realm")]
    pub admin_realm: String,

    /// OAuth client used for the admin login
    #[serde(default = "default_client_id")]
    pub client_id: String,

    /// Administrator username
    #[serde(default = "default_admin_username")]
    pub admin_username: String,

    /// Administrator password (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub admin_password: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for KeycloakConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeycloakConfig")
            .field("server_url", &self.server_url)
            .field("realm", &self.realm)
            .field("admin_realm", &self.admin_realm)
            .field("client_id", &self.client_id)
            .field("admin_username", &self.admin_username)
            .field(
                "admin_password",
                &self.admin_password.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_server_url() -> String {
    "http://localhost:8081".to_string()
}

fn default_realm() -> String {
    "saas-iam".to_string()
}

fn default_admin_realm() -> String {
    "master".to_string()
}

fn default_client_id() -> String {
    "admin-cli".to_string()
}

fn default_admin_username() -> String {
    "admin".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for KeycloakConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            realm: default_realm(),
            admin_realm: default_admin_realm(),
            client_id: default_client_id(),
            admin_username: default_admin_username(),
            admin_password: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl KeycloakConfig {
    /// Get the admin password as a string reference (for the token request)
    #[must_use]
    pub fn admin_password_str(&self) -> Option<&str> {
        self.admin_password.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Token endpoint of the admin realm
    #[must_use]
    pub fn token_url(&self) -> String {
        format!(
            "{}/realms/{}/protocol/openid-connect/token",
            self.base(),
            self.admin_realm
        )
    }

    /// User collection of the managed realm
    #[must_use]
    pub fn users_url(&self) -> String {
        format!("{}/admin/realms/{}/users", self.base(), self.realm)
    }

    fn base(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }
}
