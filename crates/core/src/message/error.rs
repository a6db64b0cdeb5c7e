use thiserror::Error;

/// Client input errors detected before any storage access.
///
/// The `Display` text is what clients see; the carried detail is for logs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Message content is required")]
    MissingContent,
    #[error("Invalid request body")]
    InvalidBody(String),
    #[error("Invalid message id")]
    InvalidId(String),
}
