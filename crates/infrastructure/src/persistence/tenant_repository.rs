//! SQLite tenant repository
//!
//! Implements the `TenantRepository` port using SQLite.

use std::sync::Arc;

use application::{error::ApplicationError, ports::TenantRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{Tenant, TenantId, TenantStatus};
use rusqlite::{OptionalExtension, Row, params};
use tokio::task;
use tracing::{debug, instrument};

use super::{
    connection::ConnectionPool,
    error::{conversion_error, map_join_error, map_pool_error, map_rusqlite_error},
};

/// SQLite-based tenant repository
#[derive(Debug, Clone)]
pub struct SqliteTenantRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteTenantRepository {
    /// Create a new SQLite tenant repository
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

/// Parse a stored RFC 3339 timestamp
pub(crate) fn parse_timestamp(
    column: usize,
    value: &str,
) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(column, e))
}

/// Convert a `tenants` row to a `Tenant`
///
/// Expects the columns `id, name, status, created_at`.
pub(crate) fn row_to_tenant(row: &Row<'_>) -> Result<Tenant, rusqlite::Error> {
    let id_str: String = row.get(0)?;
    let name: String = row.get(1)?;
    let status_str: String = row.get(2)?;
    let created_at_str: String = row.get(3)?;

    let id = TenantId::parse(&id_str).map_err(|e| conversion_error(0, e))?;
    let status = status_str
        .parse::<TenantStatus>()
        .map_err(|e| conversion_error(2, e))?;
    let created_at = parse_timestamp(3, &created_at_str)?;

    Ok(Tenant::restore(id, name, status, created_at))
}

#[async_trait]
impl TenantRepository for SqliteTenantRepository {
    #[instrument(skip(self, tenant), fields(tenant_id = %tenant.id()))]
    async fn save(&self, tenant: &Tenant) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let tenant = tenant.clone();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(map_pool_error)?;

            conn.execute(
                "INSERT INTO tenants (id, name, status, created_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                     name = excluded.name,
                     status = excluded.status",
                params![
                    tenant.id().to_string(),
                    tenant.name(),
                    tenant.status().as_str(),
                    tenant.created_at().to_rfc3339(),
                ],
            )
            .map_err(map_rusqlite_error)?;

            debug!("Saved tenant");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    #[instrument(skip(self), fields(tenant_id = %id))]
    async fn find_by_id(&self, id: &TenantId) -> Result<Option<Tenant>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let id_str = id.to_string();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(map_pool_error)?;

            let tenant = conn
                .query_row(
                    "SELECT id, name, status, created_at FROM tenants WHERE id = ?1",
                    [&id_str],
                    row_to_tenant,
                )
                .optional()
                .map_err(map_rusqlite_error)?;

            debug!(found = tenant.is_some(), "Retrieved tenant");
            Ok(tenant)
        })
        .await
        .map_err(map_join_error)?
    }

    #[instrument(skip(self))]
    async fn exists_by_name(&self, name: &str) -> Result<bool, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let name = name.to_owned();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(map_pool_error)?;

            let exists: bool = conn
                .query_row(
                    "SELECT EXISTS(SELECT 1 FROM tenants WHERE name = ?1)",
                    [&name],
                    |row| row.get(0),
                )
                .map_err(map_rusqlite_error)?;

            Ok(exists)
        })
        .await
        .map_err(map_join_error)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::DatabaseConfig, persistence::create_pool};

    fn setup_test_db() -> Arc<ConnectionPool> {
        Arc::new(create_pool(&DatabaseConfig::in_memory()).unwrap())
    }

    #[tokio::test]
    async fn save_and_find_tenant() {
        let repo = SqliteTenantRepository::new(setup_test_db());
        let tenant = Tenant::register(TenantId::new(), "Acme Corp").unwrap();

        repo.save(&tenant).await.unwrap();

        let found = repo.find_by_id(&tenant.id()).await.unwrap().unwrap();
        assert_eq!(found, tenant);
    }

    #[tokio::test]
    async fn in_memory_pool_sized_above_one_shares_data() {
        let config = DatabaseConfig {
            max_connections: 3,
            ..DatabaseConfig::in_memory()
        };
        let repo = SqliteTenantRepository::new(Arc::new(create_pool(&config).unwrap()));

        for name in ["Acme Corp", "Globex", "Initech"] {
            let tenant = Tenant::register(TenantId::new(), name).unwrap();
            repo.save(&tenant).await.unwrap();
            assert!(repo.find_by_id(&tenant.id()).await.unwrap().is_some());
        }
        assert!(repo.exists_by_name("Acme Corp").await.unwrap());
    }

    #[tokio::test]
    async fn find_missing_tenant_returns_none() {
        let repo = SqliteTenantRepository::new(setup_test_db());
        assert!(repo.find_by_id(&TenantId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn exists_by_name_is_exact() {
        let repo = SqliteTenantRepository::new(setup_test_db());
        let tenant = Tenant::register(TenantId::new(), "Acme Corp").unwrap();
        repo.save(&tenant).await.unwrap();

        assert!(repo.exists_by_name("Acme Corp").await.unwrap());
        assert!(!repo.exists_by_name("Acme").await.unwrap());
    }

    #[tokio::test]
    async fn saving_status_change_updates_row() {
        let repo = SqliteTenantRepository::new(setup_test_db());
        let mut tenant = Tenant::register(TenantId::new(), "Acme Corp").unwrap();
        repo.save(&tenant).await.unwrap();

        tenant.suspend();
        repo.save(&tenant).await.unwrap();

        let found = repo.find_by_id(&tenant.id()).await.unwrap().unwrap();
        assert_eq!(found.status(), TenantStatus::Suspended);
        assert_eq!(found.created_at(), tenant.created_at());
    }

    #[tokio::test]
    async fn duplicate_name_is_a_conflict() {
        let repo = SqliteTenantRepository::new(setup_test_db());
        repo.save(&Tenant::register(TenantId::new(), "Acme Corp").unwrap())
            .await
            .unwrap();

        let err = repo
            .save(&Tenant::register(TenantId::new(), "Acme Corp").unwrap())
            .await
            .unwrap_err();

        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn pending_status_is_persisted_by_name() {
        let pool = setup_test_db();
        let repo = SqliteTenantRepository::new(Arc::clone(&pool));
        let tenant = Tenant::restore(
            TenantId::new(),
            "Legacy".to_string(),
            TenantStatus::Pending,
            Utc::now(),
        );
        repo.save(&tenant).await.unwrap();

        let stored: String = pool
            .get()
            .unwrap()
            .query_row(
                "SELECT status FROM tenants WHERE id = ?1",
                [tenant.id().to_string()],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(stored, "PENDING");
    }
}
