//! Health check handler.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports service liveness.
///
/// # Endpoint
///
/// `GET /health` (unauthenticated)
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
