use mongodb::bson::doc;
use tracing::{instrument, warn};

use crate::store::{DocumentStore, EntityKind, StoreError, document_to_json};

use super::model::{Announcement, fallback_announcements};

/// The public feed returns at most this many records.
const ANNOUNCEMENT_LIMIT: i64 = 5;

pub struct AnnouncementService;

impl AnnouncementService {
    /// Up to five visible announcements, or the static fallback on any
    /// store failure. This path deliberately never returns an error.
    #[instrument(skip(store))]
    pub async fn list(store: &DocumentStore) -> Vec<Announcement> {
        match Self::list_visible(store).await {
            Ok(items) => items,
            Err(err) => {
                warn!(error = %err, "announcements lookup failed, serving fallback feed");
                fallback_announcements()
            }
        }
    }

    async fn list_visible(store: &DocumentStore) -> Result<Vec<Announcement>, StoreError> {
        let documents = store
            .find_documents(
                EntityKind::Announcement,
                doc! { "visible": true },
                Some(ANNOUNCEMENT_LIMIT),
            )
            .await?;

        documents
            .into_iter()
            .map(|doc| serde_json::from_value(document_to_json(doc)).map_err(StoreError::Decode))
            .collect()
    }
}
