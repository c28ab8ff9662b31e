use crate::config::cors::CorsConfig;
use crate::config::database::init_store;
use crate::store::DocumentStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: DocumentStore,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        store: init_store().await,
        cors_config: CorsConfig::from_env(),
    }
}
