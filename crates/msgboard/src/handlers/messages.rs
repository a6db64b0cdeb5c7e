//! Message handlers.
//!
//! Each handler validates its input, makes at most one repository call, and
//! maps the result to a response. Errors convert into [`AppError`] (JSON
//! body) or [`PlainTextError`] (text body, list only).

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap},
    Json,
};

use msgboard_core::message::{
    parse_create_body, parse_message_id, validate_create_request, CreateMessageRequest,
    CreateMessageResponse, DeleteMessageResponse, Message,
};

use crate::{
    handlers::{AppError, PlainTextError},
    state::AppState,
};

/// List all messages, newest first (GET /messages).
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<Message>>, PlainTextError> {
    let messages = state.message_repo.list_messages().await?;

    tracing::debug!(count = messages.len(), "Listed messages");

    Ok(Json(messages))
}

/// Create a new message (POST /messages).
///
/// A request without a JSON content type, or with an empty JSON body, is
/// treated as `{}`, so it fails validation with "Message content is required".
pub async fn create_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CreateMessageResponse>, AppError> {
    let request = if has_json_content_type(&headers) {
        parse_create_body(&body)?
    } else {
        CreateMessageRequest::default()
    };

    let new_message = validate_create_request(request)?;
    let message = state.message_repo.create_message(new_message).await?;

    tracing::info!(message_id = message.id, "Created message");

    Ok(Json(CreateMessageResponse::new(message)))
}

/// Delete a message by ID (DELETE /messages/{id}).
///
/// Malformed ids are rejected with 400 before touching storage.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteMessageResponse>, AppError> {
    let id = parse_message_id(&raw_id)?;

    state.message_repo.delete_message(id).await?;

    tracing::info!(message_id = id, "Deleted message");

    Ok(Json(DeleteMessageResponse::default()))
}

/// Whether the request declares `application/json` or an `application/*+json`
/// media type. Parameters such as `charset` are ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", "json")) => true,
        Some(("application", subtype)) => subtype.ends_with("+json"),
        _ => false,
    }
}
