//! # HTTP Error Mapping
//!
//! Every handler returns `Result<_, AppError>`. The error carries its
//! taxonomy kind and a short client-safe reason; driver details are logged
//! when the error is created and never reach the response.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ErrorKind::NotFound   ──► 404  "not found"                             │
//! │  ErrorKind::BadRequest ──► 400  "bad request: malformatted id"          │
//! │  ErrorKind::Internal   ──► 500  "internal error"                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use apex_core::{ErrorKind, ValidationError};
use apex_db::DbError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{debug, error};

/// A failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    pub kind: ErrorKind,

    /// Client-safe detail appended to the kind's message.
    pub reason: Option<String>,
}

impl AppError {
    pub fn new(kind: ErrorKind) -> Self {
        AppError { kind, reason: None }
    }

    pub fn not_found() -> Self {
        AppError::new(ErrorKind::NotFound)
    }

    pub fn bad_request(reason: impl Into<String>) -> Self {
        AppError {
            kind: ErrorKind::BadRequest,
            reason: Some(reason.into()),
        }
    }

    pub fn internal() -> Self {
        AppError::new(ErrorKind::Internal)
    }

    pub fn status(&self) -> StatusCode {
        match self.kind {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response body: the kind's message, optionally followed by the reason.
    pub fn body(&self) -> String {
        match &self.reason {
            Some(reason) => format!("{}: {}", self.kind.message(), reason),
            None => self.kind.message().to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.body())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.body()).into_response()
    }
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err.kind() {
            ErrorKind::NotFound => {
                debug!(error = %err, "Record not found");
                AppError::not_found()
            }
            kind => {
                error!(error = %err, "Database operation failed");
                AppError::new(kind)
            }
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        debug!(error = %err, "Rejected request input");
        AppError {
            kind: err.kind(),
            reason: Some(err.to_string()),
        }
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        error!(error = %err, detail = ?err.detail(), "Unable to render template");
        AppError::internal()
    }
}
