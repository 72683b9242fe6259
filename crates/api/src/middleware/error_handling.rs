//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! handler reports failures the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use carebook_core::errors::BookingError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// Handlers return `Result<_, AppError>`; `?` converts both `BookingError`
/// and `eyre::Report` into it.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::InvalidDuration(_) => StatusCode::BAD_REQUEST,
            BookingError::Conflict(_) => StatusCode::CONFLICT,
            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Storage failures surface as `BookingError::Database`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}

/// Maps a BookingError to an HTTP response
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
