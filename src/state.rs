use std::sync::Arc;

use mongodb::Client as MongoClient;

use crate::config::Config;
use crate::repositories::{MongoTestCaseStore, TestCaseStore};
use crate::services::TestCaseService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Persistence gateway; also used directly by the demo-data seeder
    pub store: Arc<dyn TestCaseStore>,
    pub service: TestCaseService,
}

impl AppState {
    /// Create a new AppState by connecting to MongoDB
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        let client = MongoClient::with_uri_str(&config.mongodb_url)
            .await
            .map_err(|e| AppStateError::Mongo(e.to_string()))?;

        let db = client.database(&config.mongodb_database);
        let store: Arc<dyn TestCaseStore> = Arc::new(MongoTestCaseStore::new(&db));

        Ok(Self::with_store(config, store))
    }

    /// Create AppState over any store implementation (used by tests)
    pub fn with_store(config: Config, store: Arc<dyn TestCaseStore>) -> Self {
        Self {
            config,
            service: TestCaseService::new(store.clone()),
            store,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("MongoDB connection error: {0}")]
    Mongo(String),
}
