use crate::modules::users::controller::update_profile;
use crate::state::AppState;
use axum::{Router, routing::put};

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/profile/{email}", put(update_profile))
}
