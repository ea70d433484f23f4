//! Persistence module
//!
//! SQLite-based storage for tenants, users and memberships, plus in-memory
//! equivalents.

pub mod connection;
mod error;
pub mod in_memory;
pub mod migrations;
mod tenant_read_model;
mod tenant_repository;
mod user_repository;

pub use connection::{ConnectionPool, DatabaseError, PooledConn, create_pool};
pub use error::map_rusqlite_error;
pub use in_memory::{InMemoryTenantReadModel, InMemoryTenantRepository, InMemoryUserRepository};
pub use tenant_read_model::SqliteTenantReadModel;
pub use tenant_repository::SqliteTenantRepository;
pub use user_repository::SqliteUserRepository;
