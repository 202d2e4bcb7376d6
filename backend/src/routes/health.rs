//! Health check endpoint

use axum::Json;
use fitcalc_shared::types::HealthResponse;

/// GET /api/health - Basic health check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
