pub mod error;
pub mod health;
pub mod messages;

pub use error::{AppError, PlainTextError};
