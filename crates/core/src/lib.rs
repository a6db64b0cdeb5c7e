//! Functional core for the msgboard service.
//!
//! Pure data types, validation, and error mapping. Nothing in this crate
//! performs I/O; storage backends and HTTP wiring live in the `msgboard`
//! binary crate.

pub mod message;
pub mod storage;
