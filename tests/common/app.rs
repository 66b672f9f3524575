use std::sync::Arc;

use axum_test::TestServer;
use casetrack::build_router;
use casetrack::config::Config;
use casetrack::repositories::InMemoryStore;
use casetrack::state::AppState;

/// Test configuration; the suite runs over the in-memory store, so no live
/// MongoDB is required
pub fn test_config() -> Config {
    Config {
        mongodb_url: "mongodb://localhost:27017".to_string(),
        mongodb_database: "casetrack_test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        seed_demo_data: false,
    }
}

/// Test application wrapper
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application over the in-memory store
    pub async fn new() -> Self {
        let config = test_config();

        let state = AppState::with_store(config, Arc::new(InMemoryStore::new()));

        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, state }
    }
}
