use crate::state::AppState;
use axum::{Json, extract::State};
use tracing::instrument;

use super::model::HealthResponse;
use super::service::HealthService;

/// Store connectivity diagnostics
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Diagnostics summary; this endpoint never fails", body = HealthResponse)
    ),
    tag = "Health"
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthService::diagnostics(&state.store).await)
}
