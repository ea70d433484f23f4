//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports: SQLite and in-memory storage, the
//! Keycloak identity provider, in-process event delivery. Also owns
//! configuration loading and telemetry setup.

pub mod adapters;
pub mod config;
pub mod events;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, DatabaseConfig, Environment, KeycloakConfig};
pub use events::{
    EventListener, InProcessEventBus, WelcomeNotification, WelcomeNotificationListener,
};
pub use persistence::{
    ConnectionPool, DatabaseError, InMemoryTenantReadModel, InMemoryTenantRepository,
    InMemoryUserRepository, SqliteTenantReadModel, SqliteTenantRepository, SqliteUserRepository,
    create_pool,
};
pub use telemetry::{TelemetryConfig, TelemetryError, TelemetryGuard, init_telemetry};
