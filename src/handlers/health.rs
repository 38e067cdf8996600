//! # Health Check Handler
//!
//! Simple endpoint to check if the server is running.

use axum::Json;
use serde_json::{json, Value};

/// Health check endpoint
///
/// ## Route
/// GET /health
///
/// ## Response
/// ```json
/// {
///   "status": "healthy",
///   "service": "article-board"
/// }
/// ```
///
/// Never fails and ignores the `Accept` header, so it returns `Json<Value>`
/// directly rather than going through the renderer.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "article-board"
    }))
}
