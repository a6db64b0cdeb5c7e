use std::{env, path::PathBuf};

/// Default bound on pooled storage connections.
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Default directory for static assets served at the web root.
const DEFAULT_STATIC_DIR: &str = "public";

/// Application configuration loaded from environment variables.
///
/// Host and port are CLI arguments (see `main.rs`); everything else lives here.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string (no default).
    /// Note: Only used when the `postgres` feature is enabled.
    #[allow(dead_code)]
    pub database_url: Option<String>,
    /// Maximum number of pooled connections (default: 10)
    #[allow(dead_code)]
    pub db_max_connections: u32,
    /// Directory served verbatim at the web root (default: "public")
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_URL` - PostgreSQL connection string (required by the postgres backend)
    /// - `DB_MAX_CONNECTIONS` - Connection pool bound (default: 10)
    /// - `STATIC_DIR` - Static asset directory (default: "public")
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .filter(|max| *max > 0)
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        }
    }
}
