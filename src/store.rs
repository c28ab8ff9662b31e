//! Document store adapter backed by MongoDB.
//!
//! Each entity kind gets its own collection (collection-per-entity pattern).
//! The handle wraps `Option<Database>` so the process can boot without a
//! configured store; every operation checks availability first and fails with
//! [`StoreError::Unavailable`] instead of panicking.
//!
//! Records keep MongoDB's `_id` internally; [`document_to_json`] renames it
//! to `id` (ObjectId stringified to hex) when surfacing records to clients.

use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use thiserror::Error;
use tracing::warn;

/// MongoDB reports unique-index violations with this error code.
const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store not configured")]
    Unavailable,
    #[error("duplicate key")]
    DuplicateKey,
    #[error("failed to write document: {0}")]
    Write(#[source] mongodb::error::Error),
    #[error("failed to read documents: {0}")]
    Read(#[source] mongodb::error::Error),
    #[error("failed to decode stored document: {0}")]
    Decode(#[source] serde_json::Error),
}

/// The entity kinds this service persists. Each maps to a fixed collection
/// name and carries its own index spec, so collection dispatch is typed
/// rather than driven by runtime name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Course,
    ScheduleEntry,
    Announcement,
}

impl EntityKind {
    pub fn collection_name(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Course => "course",
            EntityKind::ScheduleEntry => "scheduleentry",
            EntityKind::Announcement => "announcement",
        }
    }

    /// Indexes this kind needs: email uniqueness is arbitrated here, and the
    /// owner-scoped listings get secondary indexes.
    fn index_models(&self) -> Vec<IndexModel> {
        match self {
            EntityKind::User => vec![
                IndexModel::builder()
                    .keys(doc! { "email": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build(),
            ],
            EntityKind::Course => vec![
                IndexModel::builder().keys(doc! { "owner_email": 1 }).build(),
            ],
            EntityKind::ScheduleEntry => vec![
                IndexModel::builder()
                    .keys(doc! { "owner_email": 1, "day": 1 })
                    .build(),
            ],
            EntityKind::Announcement => Vec::new(),
        }
    }

    fn all() -> [EntityKind; 4] {
        [
            EntityKind::User,
            EntityKind::Course,
            EntityKind::ScheduleEntry,
            EntityKind::Announcement,
        ]
    }
}

/// Process-wide store handle. Initialized once at startup and cloned into
/// the application state; cloning is cheap (the driver handle is pooled).
#[derive(Debug, Clone)]
pub struct DocumentStore {
    db: Option<Database>,
}

impl DocumentStore {
    pub fn new(db: Database) -> Self {
        Self { db: Some(db) }
    }

    /// A store with no backing database. Every operation returns
    /// [`StoreError::Unavailable`]; the server still serves degraded
    /// responses (503s, announcement fallback, health diagnostics).
    pub fn unconfigured() -> Self {
        Self { db: None }
    }

    pub fn is_available(&self) -> bool {
        self.db.is_some()
    }

    fn collection(&self, kind: EntityKind) -> Result<Collection<Document>, StoreError> {
        self.db
            .as_ref()
            .map(|db| db.collection(kind.collection_name()))
            .ok_or(StoreError::Unavailable)
    }

    /// Insert one document and return its generated id as a hex string.
    pub async fn create_document(
        &self,
        kind: EntityKind,
        document: Document,
    ) -> Result<String, StoreError> {
        let collection = self.collection(kind)?;
        match collection.insert_one(document).await {
            Ok(result) => Ok(match result.inserted_id {
                Bson::ObjectId(oid) => oid.to_hex(),
                other => other.to_string(),
            }),
            Err(err) if is_duplicate_key(&err) => Err(StoreError::DuplicateKey),
            Err(err) => Err(StoreError::Write(err)),
        }
    }

    /// All documents matching the filter in store-native order, each
    /// retaining its `_id`.
    pub async fn find_documents(
        &self,
        kind: EntityKind,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError> {
        let collection = self.collection(kind)?;
        let mut find = collection.find(filter);
        if let Some(limit) = limit {
            find = find.limit(limit);
        }
        let cursor = find.await.map_err(StoreError::Read)?;
        cursor.try_collect().await.map_err(StoreError::Read)
    }

    pub async fn find_one(
        &self,
        kind: EntityKind,
        filter: Document,
        projection: Option<Document>,
    ) -> Result<Option<Document>, StoreError> {
        let collection = self.collection(kind)?;
        let mut find = collection.find_one(filter);
        if let Some(projection) = projection {
            find = find.projection(projection);
        }
        find.await.map_err(StoreError::Read)
    }

    /// `$set` merge into the first document matching the filter. Matching
    /// zero documents is not an error; callers that need existence check it
    /// with a follow-up read.
    pub async fn update_one(
        &self,
        kind: EntityKind,
        filter: Document,
        set: Document,
    ) -> Result<(), StoreError> {
        let collection = self.collection(kind)?;
        collection
            .update_one(filter, doc! { "$set": set })
            .await
            .map_err(StoreError::Write)?;
        Ok(())
    }

    /// Create the per-kind indexes. Idempotent and best-effort: index
    /// failures are logged and swallowed so startup never aborts on them.
    pub async fn ensure_indexes(&self) {
        let Some(db) = &self.db else {
            return;
        };

        for kind in EntityKind::all() {
            let models = kind.index_models();
            if models.is_empty() {
                continue;
            }
            let collection = db.collection::<Document>(kind.collection_name());
            if let Err(err) = collection.create_indexes(models).await {
                warn!(
                    collection = kind.collection_name(),
                    error = %err,
                    "failed to ensure indexes"
                );
            }
        }
    }

    pub async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        let db = self.db.as_ref().ok_or(StoreError::Unavailable)?;
        db.list_collection_names().await.map_err(StoreError::Read)
    }
}

/// Convert a stored document into client-facing JSON, renaming `_id` → `id`
/// and stringifying ObjectIds to their hex form.
pub fn document_to_json(mut document: Document) -> serde_json::Value {
    if let Some(id) = document.remove("_id") {
        let id = match id {
            Bson::ObjectId(oid) => Bson::String(oid.to_hex()),
            other => other,
        };
        document.insert("id", id);
    }

    Bson::Document(document).into_relaxed_extjson()
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match &*err.kind {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn collection_names_are_fixed() {
        assert_eq!(EntityKind::User.collection_name(), "user");
        assert_eq!(EntityKind::Course.collection_name(), "course");
        assert_eq!(EntityKind::ScheduleEntry.collection_name(), "scheduleentry");
        assert_eq!(EntityKind::Announcement.collection_name(), "announcement");
    }

    #[test]
    fn user_email_index_is_unique() {
        let models = EntityKind::User.index_models();
        assert_eq!(models.len(), 1);
        let options = models[0].options.as_ref().unwrap();
        assert_eq!(options.unique, Some(true));
    }

    #[test]
    fn schedule_index_covers_owner_and_day() {
        let models = EntityKind::ScheduleEntry.index_models();
        assert_eq!(models.len(), 1);
        let keys = &models[0].keys;
        assert!(keys.contains_key("owner_email"));
        assert!(keys.contains_key("day"));
    }

    #[test]
    fn document_to_json_renames_object_id() {
        let oid = ObjectId::new();
        let document = doc! { "_id": oid, "title": "Algorithms" };

        let json = document_to_json(document);

        assert_eq!(json["id"], oid.to_hex());
        assert_eq!(json["title"], "Algorithms");
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn document_to_json_without_id_is_passthrough() {
        let json = document_to_json(doc! { "title": "Tip" });
        assert!(json.get("id").is_none());
        assert_eq!(json["title"], "Tip");
    }

    #[tokio::test]
    async fn unconfigured_store_rejects_every_operation() {
        let store = DocumentStore::unconfigured();
        assert!(!store.is_available());

        let created = store
            .create_document(EntityKind::User, doc! { "email": "a@b.c" })
            .await;
        assert!(matches!(created, Err(StoreError::Unavailable)));

        let found = store
            .find_documents(EntityKind::Course, doc! {}, None)
            .await;
        assert!(matches!(found, Err(StoreError::Unavailable)));

        let one = store.find_one(EntityKind::User, doc! {}, None).await;
        assert!(matches!(one, Err(StoreError::Unavailable)));

        let updated = store
            .update_one(EntityKind::User, doc! {}, doc! { "name": "x" })
            .await;
        assert!(matches!(updated, Err(StoreError::Unavailable)));

        let names = store.list_collection_names().await;
        assert!(matches!(names, Err(StoreError::Unavailable)));

        // best-effort no-op rather than an error
        store.ensure_indexes().await;
    }
}
