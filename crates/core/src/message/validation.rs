use serde_json::Value;

use super::error::ValidationError;
use super::requests::{CreateMessageRequest, NewMessage};
use super::types::MessageId;

/// Parses a JSON create body.
///
/// An empty (or all-whitespace) body is the same as `{}`, so it fails
/// validation as missing content rather than as malformed JSON.
pub fn parse_create_body(body: &[u8]) -> Result<CreateMessageRequest, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateMessageRequest::default());
    }

    serde_json::from_slice(body).map_err(|e| ValidationError::InvalidBody(e.to_string()))
}

/// Validates a create request, producing the content to insert.
///
/// Absent and falsy `message` values (`null`, `false`, `0`, `""`) are
/// rejected as missing. Other strings are stored as given; `true` and
/// non-zero numbers are stored as their JSON text. Arrays and objects are
/// not message content.
pub fn validate_create_request(
    request: CreateMessageRequest,
) -> Result<NewMessage, ValidationError> {
    match request.message {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(ValidationError::MissingContent),
        Some(Value::String(content)) if content.is_empty() => Err(ValidationError::MissingContent),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(ValidationError::MissingContent),
        Some(Value::String(content)) => Ok(NewMessage::new(content)),
        Some(scalar @ (Value::Bool(_) | Value::Number(_))) => {
            Ok(NewMessage::new(scalar.to_string()))
        }
        Some(other @ (Value::Array(_) | Value::Object(_))) => Err(ValidationError::InvalidBody(
            format!("message must be text, got {other}"),
        )),
    }
}

/// Parses the `{id}` path segment of `DELETE /messages/{id}`.
pub fn parse_message_id(raw: &str) -> Result<MessageId, ValidationError> {
    raw.parse::<MessageId>()
        .map_err(|_| ValidationError::InvalidId(raw.to_string()))
}

/// Maps a [`ValidationError`] to an HTTP status code.
///
/// Every validation failure is a client error (400).
pub fn validation_error_to_status_code(error: &ValidationError) -> u16 {
    match error {
        ValidationError::MissingContent
        | ValidationError::InvalidBody(_)
        | ValidationError::InvalidId(_) => 400,
    }
}
