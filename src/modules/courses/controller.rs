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

use super::model::{Course, CourseDto, CreatedCourse};
use super::service::CourseService;

/// Create a course
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CourseDto,
    responses(
        (status = 201, description = "Course created", body = CreatedCourse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 503, description = "Database not available", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CourseDto>,
) -> Result<(StatusCode, Json<CreatedCourse>), AppError> {
    let id = CourseService::create_course(&state.store, dto).await?;
    Ok((StatusCode::CREATED, Json(CreatedCourse { id })))
}

/// List courses belonging to one owner
#[utoipa::path(
    get,
    path = "/api/courses/{owner_email}",
    params(
        ("owner_email" = String, Path, description = "Owner email the courses are scoped to")
    ),
    responses(
        (status = 200, description = "Courses for that owner", body = [Course]),
        (status = 503, description = "Database not available", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn list_courses(
    State(state): State<AppState>,
    Path(owner_email): Path<String>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::list_by_owner(&state.store, &owner_email).await?;
    Ok(Json(courses))
}
