//! In-memory storage backend.
//!
//! Stores messages in a `BTreeMap` behind a `tokio::sync::RwLock`. Data is
//! lost when the process exits; used by tests and by builds with the
//! `inmemory` feature.
//!
//! # Example
//!
//! ```rust,ignore
//! use msgboard::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
