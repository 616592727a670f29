//! Health and service metadata handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::ApiError;
use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" while the server is up
    pub status: &'static str,
    /// Name of the configured data source
    pub data_source: String,
}

/// Report liveness and the configured data source
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        data_source: state.bank_service.data_source_name().to_string(),
    })
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound("No such route".to_string())
}
