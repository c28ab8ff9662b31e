use mongodb::bson::{self, doc};
use tracing::instrument;

use crate::store::{DocumentStore, EntityKind, document_to_json};
use crate::utils::errors::AppError;

use super::model::{Course, CourseDto};

pub struct CourseService;

impl CourseService {
    #[instrument(skip(store))]
    pub async fn create_course(store: &DocumentStore, dto: CourseDto) -> Result<String, AppError> {
        let document = bson::to_document(&dto).map_err(AppError::internal)?;
        store
            .create_document(EntityKind::Course, document)
            .await
            .map_err(AppError::store)
    }

    /// All courses for one owner, no pagination.
    #[instrument(skip(store))]
    pub async fn list_by_owner(
        store: &DocumentStore,
        owner_email: &str,
    ) -> Result<Vec<Course>, AppError> {
        let documents = store
            .find_documents(
                EntityKind::Course,
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
