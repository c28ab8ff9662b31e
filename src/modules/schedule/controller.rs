use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use super::model::{CreatedScheduleEntry, ScheduleEntry, ScheduleEntryDto};
use super::service::ScheduleService;

/// Add a schedule entry
#[utoipa::path(
    post,
    path = "/api/schedule",
    request_body = ScheduleEntryDto,
    responses(
        (status = 201, description = "Schedule entry created", body = CreatedScheduleEntry),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 503, description = "Database not available", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Schedule"
)]
#[instrument(skip(state))]
pub async fn create_schedule_entry(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ScheduleEntryDto>,
) -> Result<(StatusCode, Json<CreatedScheduleEntry>), AppError> {
    let id = ScheduleService::create_entry(&state.store, dto).await?;
    Ok((StatusCode::CREATED, Json(CreatedScheduleEntry { id })))
}

/// List schedule entries belonging to one owner
#[utoipa::path(
    get,
    path = "/api/schedule/{owner_email}",
    params(
        ("owner_email" = String, Path, description = "Owner email the entries are scoped to")
    ),
    responses(
        (status = 200, description = "Schedule entries for that owner", body = [ScheduleEntry]),
        (status = 503, description = "Database not available", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Schedule"
)]
#[instrument(skip(state))]
pub async fn list_schedule(
    State(state): State<AppState>,
    Path(owner_email): Path<String>,
) -> Result<Json<Vec<ScheduleEntry>>, AppError> {
    let entries = ScheduleService::list_by_owner(&state.store, &owner_email).await?;
    Ok(Json(entries))
}
