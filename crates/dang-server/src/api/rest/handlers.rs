//! API endpoint handlers

use super::extractors::JsonExtractor;
use super::types::{AppState, HealthResponse};
use crate::error::ServerError;
use axum::{extract::State, http::StatusCode, Json};
use dang_sdk::SaveDecisionRequest;
use tracing::{info, warn};

/// Health check handler
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Compile and persist a batch of decisions
pub(super) async fn save_decisions(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<SaveDecisionRequest>,
) -> Result<StatusCode, ServerError> {
    info!(
        decisions = request.decisions.len(),
        "Received decision batch"
    );

    state.service.compile_batch(&request).await.map_err(|e| {
        warn!(error = %e, "Rejected decision batch");
        ServerError::from(e)
    })?;

    Ok(StatusCode::CREATED)
}
