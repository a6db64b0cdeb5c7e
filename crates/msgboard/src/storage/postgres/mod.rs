//! PostgreSQL storage backend implementation.
//!
//! This module provides a PostgreSQL-based implementation of
//! [`msgboard_core::storage::MessageRepository`] on top of a `sqlx` pool.

mod error;
mod repository;
mod schema;

pub use repository::PostgresRepository;
