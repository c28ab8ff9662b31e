use anyhow::anyhow;
use mongodb::bson::doc;
use tracing::instrument;

use crate::store::{DocumentStore, EntityKind, document_to_json};
use crate::utils::errors::AppError;

use super::model::{UpdateProfileDto, UserProfile};

pub struct UserService;

impl UserService {
    /// Merge the provided fields into the user record, then fetch the
    /// updated profile. The update is attempted before existence is checked:
    /// for an unknown email the `$set` is a no-op and the follow-up read
    /// reports the 404.
    #[instrument(skip(store))]
    pub async fn update_profile(
        store: &DocumentStore,
        email: &str,
        dto: UpdateProfileDto,
    ) -> Result<UserProfile, AppError> {
        if !store.is_available() {
            return Err(AppError::service_unavailable(anyhow!(
                "Database not available"
            )));
        }

        let set = dto.set_document();
        if !set.is_empty() {
            store
                .update_one(EntityKind::User, doc! { "email": email }, set)
                .await
                .map_err(AppError::store)?;
        }

        let document = store
            .find_one(
                EntityKind::User,
                doc! { "email": email },
                Some(doc! { "password_hash": 0 }),
            )
            .await
            .map_err(AppError::store)?
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))?;

        serde_json::from_value(document_to_json(document)).map_err(AppError::internal)
    }
}
