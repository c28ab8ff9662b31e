use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;
use utoipa::ToSchema;

use super::model::{LoginDto, LoginResponse, RegisterDto, RegisteredResponse};
use super::service::AuthService;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = RegisteredResponse),
        (status = 400, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 503, description = "Database not available", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterDto>,
) -> Result<(StatusCode, Json<RegisteredResponse>), AppError> {
    let id = AuthService::register(&state.store, dto).await?;
    Ok((StatusCode::CREATED, Json(RegisteredResponse { id })))
}

/// Login and receive the demo token plus profile
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 503, description = "Database not available", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(&state.store, dto).await?;
    Ok(Json(response))
}
