//! Health check endpoint.

use crate::server::error::ApiError;
use crate::server::state::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

/// Health response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` on a 200 response.
    pub status: String,
}

/// `GET /health` and `GET /api/v1/health`.
///
/// 503 when the classifier failed to initialize in an environment that
/// requires the real model. Depends only on startup state.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    if !state.healthy() {
        return Err(ApiError::unavailable("ML service not initialized"));
    }
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
    }))
}
