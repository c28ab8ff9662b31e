use crate::modules::courses::controller::{create_course, list_courses};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course))
        .route("/{owner_email}", get(list_courses))
}
