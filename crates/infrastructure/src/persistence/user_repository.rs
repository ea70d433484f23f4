//! SQLite user repository
//!
//! A user is stored as one `users` row plus one `user_memberships` row per
//! tenant. The role set of a membership is flattened with
//! [`encode_roles`] and rebuilt with [`decode_roles`]; role order carries no
//! meaning.

use std::sync::Arc;

use application::{error::ApplicationError, ports::UserRepository};
use async_trait::async_trait;
use domain::{EmailAddress, TenantId, User, UserId, decode_roles, encode_roles};
use rusqlite::{Connection, OptionalExtension, params};
use tokio::task;
use tracing::{debug, instrument};

use super::{
    connection::ConnectionPool,
    error::{conversion_error, map_join_error, map_pool_error, map_rusqlite_error},
};

/// SQLite-based user repository
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteUserRepository {
    /// Create a new SQLite user repository
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

/// Load the user selected by `filter` (a column of `users`) with its memberships
fn load_user(
    conn: &Connection,
    filter: &str,
    value: &str,
) -> Result<Option<User>, rusqlite::Error> {
    let sql = format!("SELECT id, external_id, email FROM users WHERE {filter} = ?1");
    let Some((id_str, external_id, email_str)) = conn
        .query_row(&sql, [value], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })
        .optional()?
    else {
        return Ok(None);
    };

    let id = UserId::parse(&id_str).map_err(|e| conversion_error(0, e))?;
    let email = EmailAddress::new(email_str).map_err(|e| conversion_error(2, e))?;
    let mut user = User::register(id, external_id, email);

    let mut stmt =
        conn.prepare("SELECT tenant_id, roles FROM user_memberships WHERE user_id = ?1")?;
    let rows = stmt.query_map([&id_str], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    for row in rows {
        let (tenant_str, roles) = row?;
        let tenant_id = TenantId::parse(&tenant_str).map_err(|e| conversion_error(0, e))?;
        for role in decode_roles(&roles) {
            user.add_to_tenant(tenant_id, role);
        }
    }

    Ok(Some(user))
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    /// Upsert the user row and replace its membership rows in one transaction
    #[instrument(skip(self, user), fields(user_id = %user.id()))]
    async fn save(&self, user: &User) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let user = user.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            let tx = conn.transaction().map_err(map_rusqlite_error)?;
            let user_id = user.id().to_string();

            tx.execute(
                "INSERT INTO users (id, external_id, email) VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET
                     external_id = excluded.external_id,
                     email = excluded.email",
                params![user_id, user.external_id(), user.email().as_str()],
            )
            .map_err(map_rusqlite_error)?;

            tx.execute("DELETE FROM user_memberships WHERE user_id = ?1", [&user_id])
                .map_err(map_rusqlite_error)?;

            {
                let mut insert = tx
                    .prepare(
                        "INSERT INTO user_memberships (user_id, tenant_id, roles)
                         VALUES (?1, ?2, ?3)",
                    )
                    .map_err(map_rusqlite_error)?;

                for membership in user.memberships() {
                    insert
                        .execute(params![
                            user_id,
                            membership.tenant_id().to_string(),
                            encode_roles(membership.roles()),
                        ])
                        .map_err(map_rusqlite_error)?;
                }
            }

            tx.commit().map_err(map_rusqlite_error)?;
            debug!(memberships = user.memberships().count(), "Saved user");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    #[instrument(skip(self), fields(user_id = %id))]
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let id_str = id.to_string();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(map_pool_error)?;
            let user = load_user(&conn, "id", &id_str).map_err(map_rusqlite_error)?;

            debug!(found = user.is_some(), "Retrieved user by id");
            Ok(user)
        })
        .await
        .map_err(map_join_error)?
    }

    #[instrument(skip(self, email))]
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let email = email.as_str().to_owned();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(map_pool_error)?;
            let user = load_user(&conn, "email", &email).map_err(map_rusqlite_error)?;

            debug!(found = user.is_some(), "Retrieved user by email");
            Ok(user)
        })
        .await
        .map_err(map_join_error)?
    }
}
