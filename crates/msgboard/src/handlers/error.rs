use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use msgboard_core::message::{validation_error_to_status_code, ErrorResponse, ValidationError};
use msgboard_core::storage::{repository_error_to_status_code, RepositoryError};

/// Client-facing text for any storage failure other than not-found.
pub const SERVER_ERROR: &str = "Server Error";

/// Client-facing text for a delete that matched no row.
pub const MESSAGE_NOT_FOUND: &str = "Message not found";

/// Handler error, mapped to a status code and a JSON `{"error": ...}` body.
///
/// Storage details are logged here and never sent to the client.
#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    Repository(RepositoryError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            AppError::Validation(e) => validation_error_to_status_code(e),
            AppError::Repository(e) => repository_error_to_status_code(e),
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// The text sent to the client.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::Repository(e) if e.is_not_found() => MESSAGE_NOT_FOUND.to_string(),
            AppError::Repository(_) => SERVER_ERROR.to_string(),
        }
    }

    fn log(&self) {
        match self {
            AppError::Validation(ValidationError::InvalidBody(detail)) => {
                tracing::warn!(detail = %detail, "Rejected request body");
            }
            AppError::Validation(ValidationError::InvalidId(raw)) => {
                tracing::warn!(id = %raw, "Rejected message id");
            }
            AppError::Validation(e) => tracing::warn!(error = %e, "Rejected request"),
            AppError::Repository(e) if e.is_not_found() => tracing::debug!(error = %e, "Not found"),
            AppError::Repository(e) => tracing::error!(error = %e, "Storage operation failed"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        (
            self.status_code(),
            Json(ErrorResponse::new(self.client_message())),
        )
            .into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}

/// Same mapping as [`AppError`], rendered as a plain-text body.
#[derive(Debug)]
pub struct PlainTextError(pub AppError);

impl IntoResponse for PlainTextError {
    fn into_response(self) -> Response {
        self.0.log();
        (self.0.status_code(), self.0.client_message()).into_response()
    }
}

impl From<RepositoryError> for PlainTextError {
    fn from(err: RepositoryError) -> Self {
        Self(AppError::Repository(err))
    }
}
