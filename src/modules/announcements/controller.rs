use crate::state::AppState;
use axum::{Json, extract::State};
use tracing::instrument;

use super::model::Announcement;
use super::service::AnnouncementService;

/// Public announcements feed
#[utoipa::path(
    get,
    path = "/api/announcements",
    responses(
        (status = 200, description = "Up to five visible announcements, or the static fallback feed", body = [Announcement])
    ),
    tag = "Announcements"
)]
#[instrument(skip(state))]
pub async fn list_announcements(State(state): State<AppState>) -> Json<Vec<Announcement>> {
    Json(AnnouncementService::list(&state.store).await)
}
