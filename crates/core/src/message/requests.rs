//! API payload types for message operations.
//!
//! Pure data types with no I/O. Request types are deserialized from client
//! bodies; response types serialize to the exact JSON shapes clients expect.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::Message;

/// Text returned in the `message` field of a successful delete.
pub const MESSAGE_DELETED: &str = "Message deleted";

/// Request payload for creating a message (`POST /messages`).
///
/// `message` is kept as raw JSON so that a missing field and falsy values
/// (`null`, `false`, `0`, `""`) all reach validation instead of failing
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

impl CreateMessageRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(Value::String(message.into())),
        }
    }
}

/// Validated content for a message that is about to be inserted.
///
/// Only constructed through [`super::validate_create_request`], so holding
/// one means the content is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    content: String,
}

impl NewMessage {
    pub(super) fn new(content: String) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

/// Response body for a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMessageResponse {
    pub success: bool,
    pub message: Message,
}

impl CreateMessageResponse {
    pub fn new(message: Message) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

/// Response body for a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMessageResponse {
    pub success: bool,
    pub message: String,
}

impl Default for DeleteMessageResponse {
    fn default() -> Self {
        Self {
            success: true,
            message: MESSAGE_DELETED.to_string(),
        }
    }
}

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
