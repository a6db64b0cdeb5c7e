//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage is reached through a repository trait object so
//! handlers never see the concrete backend or its connection pool.

use std::{path::PathBuf, sync::Arc};

use msgboard_core::storage::MessageRepository;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler; clones share the same repository.
#[derive(Clone)]
pub struct AppState {
    /// Message repository (owns the connection pool for database backends).
    pub message_repo: Arc<dyn MessageRepository>,
    /// Directory served at the web root.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(message_repo: Arc<dyn MessageRepository>, config: &Config) -> Self {
        Self {
            message_repo,
            static_dir: config.static_dir.clone(),
        }
    }
}

// ============================================================================
// Factory functions for each storage backend
// ============================================================================

#[cfg(feature = "postgres")]
mod postgres_backend {
    use super::*;
    use crate::storage::PostgresRepository;

    impl AppState {
        /// Creates AppState with PostgreSQL storage.
        ///
        /// The pool connects lazily; only a missing or malformed
        /// `DATABASE_URL` fails here.
        pub fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?;

            let repo = PostgresRepository::connect_lazy(database_url, config.db_max_connections)?;

            Ok(Self::new(Arc::new(repo), config))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for running without any external dependencies.
        pub fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::warn!("Using in-memory storage; messages will not survive a restart");
            Ok(Self::new(Arc::new(InMemoryRepository::new()), config))
        }
    }
}
