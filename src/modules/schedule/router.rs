use crate::modules::schedule::controller::{create_schedule_entry, list_schedule};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_schedule_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_schedule_entry))
        .route("/{owner_email}", get(list_schedule))
}
