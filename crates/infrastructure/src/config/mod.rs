//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `config.toml`, then `IAM_`-prefixed environment variables with `__`
//! between section and key (e.g. `IAM_DATABASE__PATH`).

mod database;

use std::{fmt, path::Path};

use application::error::ApplicationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use database::DatabaseConfig;
pub use integration_keycloak::KeycloakConfig;

pub use crate::telemetry::TelemetryConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application environment (development or production)
///
/// Production enables strict validation of secrets and storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Keycloak identity provider configuration
    #[serde(default)]
    pub keycloak: KeycloakConfig,

    /// Logging and trace export configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("IAM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        debug!(environment = %loaded.environment, "Configuration loaded");
        Ok(loaded)
    }

    /// Load configuration from an explicit file, without environment overrides
    ///
    /// The format is taken from the file extension.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(true))
            .build()?
            .try_deserialize()
    }

    /// Whether the production environment is selected
    pub const fn is_production(&self) -> bool {
        matches!(self.environment, Environment::Production)
    }

    /// Reject settings the service cannot run with
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] for an empty connection
    /// pool, and in production for a missing Keycloak admin password or an
    /// in-memory database.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.database.max_connections == 0 {
            return Err(ApplicationError::Configuration(
                "database.max_connections must be at least 1".to_string(),
            ));
        }

        if !self.is_production() {
            return Ok(());
        }

        if self.keycloak.admin_password.is_none() {
            return Err(ApplicationError::Configuration(
                "keycloak.admin_password must be set in production".to_string(),
            ));
        }

        if self.database.is_in_memory() {
            return Err(ApplicationError::Configuration(
                "database.path must point to a file in production".to_string(),
            ));
        }

        Ok(())
    }
}
