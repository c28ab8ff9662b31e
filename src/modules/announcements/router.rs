use crate::modules::announcements::controller::list_announcements;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_announcements_router() -> Router<AppState> {
    Router::new().route("/", get(list_announcements))
}
