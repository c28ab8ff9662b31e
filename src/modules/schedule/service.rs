use mongodb::bson::{self, doc};
use tracing::instrument;

use crate::store::{DocumentStore, EntityKind, document_to_json};
use crate::utils::errors::AppError;

use super::model::{ScheduleEntry, ScheduleEntryDto};

pub struct ScheduleService;

impl ScheduleService {
    #[instrument(skip(store))]
    pub async fn create_entry(
        store: &DocumentStore,
        dto: ScheduleEntryDto,
    ) -> Result<String, AppError> {
        let document = bson::to_document(&dto).map_err(AppError::internal)?;
        store
            .create_document(EntityKind::ScheduleEntry, document)
            .await
            .map_err(AppError::store)
    }

    /// All entries for one owner, no pagination, store-native order.
    #[instrument(skip(store))]
    pub async fn list_by_owner(
        store: &DocumentStore,
        owner_email: &str,
    ) -> Result<Vec<ScheduleEntry>, AppError> {
        let documents = store
            .find_documents(
                EntityKind::ScheduleEntry,
                doc! { "owner_email": owner_email },
                None,
            )
            .await
            .map_err(AppError::store)?;

        documents
            .into_iter()
            .map(|doc| serde_json::from_value(document_to_json(doc)).map_err(AppError::internal))
            .collect()
    }
}
