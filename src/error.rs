//! # Error Handling
//!
//! Application error type and its mapping onto HTTP responses.
//!
//! Handlers return `AppResult<T>`; whatever goes wrong is converted into a
//! status code plus a small JSON body by the `IntoResponse` impl below.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-wide error type
///
/// The first three variants are the domain errors the stores and guards
/// produce. `Xml` wraps serializer failures from the renderer; it is converted
/// automatically from `quick_xml::DeError` by the `?` operator.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found errors (404)
    ///
    /// Unknown or malformed article ids
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation errors (400)
    ///
    /// Blank passwords, blank or already-taken usernames
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Authentication/authorization errors (401)
    ///
    /// Raised by the route guards when the caller's login state doesn't match
    /// what the route requires
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// XML serialization errors (500)
    #[error("XML serialization error: {0}")]
    Xml(#[from] quick_xml::DeError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Xml(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client. Wrapped library errors are replaced by a
    /// generic message so serializer internals don't leak.
    fn public_message(&self) -> String {
        match self {
            AppError::Xml(_) => "Serialization error".to_string(),
            AppError::NotFound(_) | AppError::Validation(_) | AppError::Unauthorized(_) => {
                self.to_string()
            }
        }
    }
}

/// Convert AppError into an HTTP response
///
/// Format: `{ "error": "error message here" }`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Xml(e) = &self {
            tracing::error!("XML serialization error: {:?}", e);
        }

        let body = Json(json!({
            "error": self.public_message(),
        }));

        (self.status(), body).into_response()
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
