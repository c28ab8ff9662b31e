use crate::modules::auth::controller::{login_user, register_user};
use crate::state::AppState;
use axum::{Router, routing::post};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
}
