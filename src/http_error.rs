use axum::response::{IntoResponse, Response};
use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;
use tracing::warn;

use crate::assets::{StorageError, TransformError};
use crate::store::RepoError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: Option<String>,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub code: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), code: None }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn bad_request(code: &str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message).with_code(code)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.message, code: self.code };
        (self.status, Json(body)).into_response()
    }
}

impl From<(StatusCode, String)> for AppError {
    fn from((status, msg): (StatusCode, String)) -> Self {
        AppError::new(status, msg)
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound => AppError::new(StatusCode::NOT_FOUND, "notFound").with_code("not_found"),
            RepoError::InvalidTransition { .. } => {
                AppError::new(StatusCode::CONFLICT, e.to_string()).with_code("invalid_transition")
            }
        }
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::InvalidPath(_) => AppError::bad_request("invalid_path", e.to_string()),
            other => {
                warn!("asset url resolution failed: {}", other);
                AppError::new(StatusCode::BAD_GATEWAY, other.to_string()).with_code("storage_error")
            }
        }
    }
}

impl From<TransformError> for AppError {
    fn from(e: TransformError) -> Self {
        AppError::bad_request("invalid_transform", e.to_string())
    }
}
