//! Storage backend implementations.
//!
//! This module provides concrete implementations of
//! [`msgboard_core::storage::MessageRepository`]. The backend is selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `postgres` (default): PostgreSQL backend using `sqlx`
//! - `inmemory`: process-local storage, no database required
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with PostgreSQL (default):
//! ```bash
//! cargo build -p msgboard
//! ```
//!
//! Build with in-memory storage:
//! ```bash
//! cargo build -p msgboard --no-default-features --features inmemory
//! ```

use msgboard_core::storage::MessageRepository;

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "postgres", feature = "inmemory"))]
compile_error!(
    "Features 'postgres' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "postgres", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'postgres' or 'inmemory' feature. \
    Example: cargo build -p msgboard --features postgres"
);

#[cfg(feature = "postgres")]
pub mod postgres;

// Tests always run against the in-memory backend.
#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "postgres")]
pub use postgres::PostgresRepository;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;

/// Ensures the storage schema exists before serving requests.
///
/// Failures are logged and swallowed: the server still starts, and data
/// operations will report storage errors until the database recovers.
/// Returns whether the schema is known to be ready.
pub async fn initialize(repo: &dyn MessageRepository) -> bool {
    match repo.ensure_schema().await {
        Ok(()) => {
            tracing::info!("Messages table is ready");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create messages table");
            false
        }
    }
}
