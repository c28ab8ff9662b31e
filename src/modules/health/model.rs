use serde::Serialize;
use utoipa::ToSchema;

/// Best-effort store diagnostics. Every field degrades to a descriptive
/// string instead of failing the endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
