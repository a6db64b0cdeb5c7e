//! PostgreSQL error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `msgboard_core::storage`.

use msgboard_core::storage::RepositoryError;

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - Pool, I/O, TLS and configuration errors → `RepositoryError::ConnectionFailed`
/// - Row decoding errors → `RepositoryError::Serialization`
/// - `RowNotFound` → `RepositoryError::NotFound`
/// - All other errors (including database errors) → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error, entity_type: &'static str) -> RepositoryError {
    map_sqlx_error_with_id(err, entity_type, "unknown")
}

/// Maps a sqlx error with a known ID to a RepositoryError.
///
/// Use this variant when the entity ID is known at the call site.
pub fn map_sqlx_error_with_id(
    err: sqlx::Error,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound {
            entity_type,
            id: id.into(),
        },

        sqlx::Error::PoolTimedOut => {
            RepositoryError::ConnectionFailed("Timed out waiting for a pooled connection".into())
        }
        sqlx::Error::PoolClosed => {
            RepositoryError::ConnectionFailed("Connection pool is closed".into())
        }
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_)
        | sqlx::Error::WorkerCrashed => RepositoryError::ConnectionFailed(err.to_string()),

        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::TypeNotFound { .. } => RepositoryError::Serialization(err.to_string()),

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
