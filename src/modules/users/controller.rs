use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use super::model::{UpdateProfileDto, UserProfile};
use super::service::UserService;

/// Update a user's profile fields
#[utoipa::path(
    put,
    path = "/api/profile/{email}",
    params(
        ("email" = String, Path, description = "Email of the user to update")
    ),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile without password hash", body = UserProfile),
        (status = 404, description = "No user with that email", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 503, description = "Database not available", body = ErrorResponse)
    ),
    tag = "Profile"
)]
#[instrument(skip(state))]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateProfileDto>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = UserService::update_profile(&state.store, &email, dto).await?;
    Ok(Json(profile))
}
