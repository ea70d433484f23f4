//! Shared error mapping for the SQLite persistence layer

use application::error::ApplicationError;
use rusqlite::{ErrorCode, ffi};

/// Map a rusqlite error to an application-layer error
///
/// Unique and primary key violations become [`ApplicationError::Conflict`];
/// everything else is internal.
pub fn map_rusqlite_error(e: rusqlite::Error) -> ApplicationError {
    match &e {
        rusqlite::Error::SqliteFailure(err, detail)
            if err.code == ErrorCode::ConstraintViolation
                && matches!(
                    err.extended_code,
                    ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                ) =>
        {
            ApplicationError::Conflict(
                detail
                    .clone()
                    .unwrap_or_else(|| "Unique constraint violated".to_string()),
            )
        },
        _ => ApplicationError::Internal(format!("Database error: {e}")),
    }
}

/// Map a pool checkout failure
pub fn map_pool_error(e: r2d2::Error) -> ApplicationError {
    ApplicationError::Internal(format!("Connection pool error: {e}"))
}

/// Map a failed blocking task
pub fn map_join_error(e: tokio::task::JoinError) -> ApplicationError {
    ApplicationError::Internal(e.to_string())
}

/// Wrap a conversion failure of a stored column
pub fn conversion_error<E>(column: usize, e: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
}
