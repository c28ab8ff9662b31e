use tracing::instrument;

use crate::store::DocumentStore;
use crate::utils::errors::truncate_detail;

use super::model::HealthResponse;

/// Collection names are capped so the diagnostics payload stays small.
const MAX_COLLECTIONS: usize = 10;
/// Backend error detail shown in diagnostics is truncated hard.
const MAX_DETAIL: usize = 50;

pub struct HealthService;

impl HealthService {
    /// Summarize store connectivity. Probes the store with a collection
    /// listing when configured; any failure is folded into the summary
    /// rather than surfaced as an error.
    #[instrument(skip(store))]
    pub async fn diagnostics(store: &DocumentStore) -> HealthResponse {
        let mut response = HealthResponse {
            backend: "running".to_string(),
            database: "not available".to_string(),
            database_url: env_presence("DATABASE_URL"),
            database_name: env_presence("DATABASE_NAME"),
            connection_status: "not connected".to_string(),
            collections: Vec::new(),
        };

        if !store.is_available() {
            return response;
        }

        response.connection_status = "connected".to_string();
        match store.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_COLLECTIONS);
                response.collections = names;
                response.database = "connected and working".to_string();
            }
            Err(err) => {
                let detail = truncate_detail(&err.to_string(), MAX_DETAIL);
                response.database = format!("connected but error: {detail}");
            }
        }

        response
    }
}

fn env_presence(key: &str) -> String {
    if std::env::var(key).is_ok() {
        "set".to_string()
    } else {
        "not set".to_string()
    }
}
