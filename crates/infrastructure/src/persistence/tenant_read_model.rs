//! SQLite tenant read model
//!
//! Serves tenant and membership rows for the query side without loading
//! aggregates.

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{MembershipRow, TenantReadModelPort, TenantRow},
};
use async_trait::async_trait;
use domain::{TenantId, TenantStatus};
use rusqlite::{OptionalExtension, Row};
use tokio::task;
use tracing::{debug, instrument};

use super::{
    connection::ConnectionPool,
    error::{conversion_error, map_join_error, map_pool_error, map_rusqlite_error},
    tenant_repository::parse_timestamp,
};

/// SQLite-based read model over `tenants`, `users` and `user_memberships`
#[derive(Debug, Clone)]
pub struct SqliteTenantReadModel {
    pool: Arc<ConnectionPool>,
}

impl SqliteTenantReadModel {
    /// Create a new read model
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

fn row_to_tenant_row(row: &Row<'_>) -> Result<TenantRow, rusqlite::Error> {
    let id_str: String = row.get(0)?;
    let status_str: String = row.get(2)?;
    let created_at_str: String = row.get(3)?;

    Ok(TenantRow {
        id: TenantId::parse(&id_str).map_err(|e| conversion_error(0, e))?,
        name: row.get(1)?,
        status: status_str
            .parse::<TenantStatus>()
            .map_err(|e| conversion_error(2, e))?,
        created_at: parse_timestamp(3, &created_at_str)?,
    })
}

fn row_to_membership_row(row: &Row<'_>) -> Result<MembershipRow, rusqlite::Error> {
    let tenant_str: String = row.get(1)?;

    Ok(MembershipRow {
        user_email: row.get(0)?,
        tenant_id: TenantId::parse(&tenant_str).map_err(|e| conversion_error(1, e))?,
        roles: row.get(2)?,
    })
}

#[async_trait]
impl TenantReadModelPort for SqliteTenantReadModel {
    #[instrument(skip(self), fields(tenant_id = %id))]
    async fn find_tenant(&self, id: &TenantId) -> Result<Option<TenantRow>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let id_str = id.to_string();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(map_pool_error)?;

            conn.query_row(
                "SELECT id, name, status, created_at FROM tenants WHERE id = ?1",
                [&id_str],
                row_to_tenant_row,
            )
            .optional()
            .map_err(map_rusqlite_error)
        })
        .await
        .map_err(map_join_error)?
    }

    /// Rows come back in insertion order of the membership rows
    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    async fn find_memberships(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Vec<MembershipRow>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let id_str = tenant_id.to_string();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(map_pool_error)?;

            let mut stmt = conn
                .prepare(
                    "SELECT u.email, m.tenant_id, m.roles
                     FROM user_memberships m
                     JOIN users u ON u.id = m.user_id
                     WHERE m.tenant_id = ?1
                     ORDER BY m.id",
                )
                .map_err(map_rusqlite_error)?;

            let rows = stmt
                .query_map([&id_str], row_to_membership_row)
                .map_err(map_rusqlite_error)?
                .collect::<Result<Vec<_>, _>>()
                .map_err(map_rusqlite_error)?;

            debug!(count = rows.len(), "Retrieved membership rows");
            Ok(rows)
        })
        .await
        .map_err(map_join_error)?
    }
}
