//! Document store initialization.
//!
//! Reads `DATABASE_URL` (MongoDB connection string) and `DATABASE_NAME` from
//! the environment and builds the process-wide [`DocumentStore`]. Unlike a
//! hard dependency, a missing or unusable configuration does not abort
//! startup: the server boots with an unconfigured store and endpoints report
//! degraded status (503s, announcement fallback) until the store is
//! available.

use std::env;

use mongodb::Client;
use tracing::warn;

use crate::store::DocumentStore;

const DEFAULT_DATABASE_NAME: &str = "campus_scheduler";

/// Build the store handle once at startup. The driver connects lazily and
/// owns pooling; this never blocks on the server being reachable.
pub async fn init_store() -> DocumentStore {
    let Ok(uri) = env::var("DATABASE_URL") else {
        warn!("DATABASE_URL not set, starting without a document store");
        return DocumentStore::unconfigured();
    };

    let name = env::var("DATABASE_NAME").unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string());

    match Client::with_uri_str(&uri).await {
        Ok(client) => DocumentStore::new(client.database(&name)),
        Err(err) => {
            warn!(error = %err, "invalid DATABASE_URL, starting without a document store");
            DocumentStore::unconfigured()
        }
    }
}
