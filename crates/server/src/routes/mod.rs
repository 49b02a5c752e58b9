//! API route handlers
//!
//! - `health`: liveness and readiness probes
//! - `roles`: role comparison and the role suppliers

pub mod health;
pub mod roles;

use crate::error::ServerError;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Server name, version and endpoint list (`GET /`).
pub async fn api_info() -> impl IntoResponse {
    Json(json!({
        "name": "Rolecheck Server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/api/v1/compare",
            "/api/v1/roles/clean",
            "/api/v1/roles/xml",
            "/health",
            "/ready"
        ]
    }))
}

pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
