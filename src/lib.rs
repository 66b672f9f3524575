// Library crate for Casetrack
// Exports modules for use by the server binary and tests

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod services;
pub mod state;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_test_case, delete_test_case, get_test_case, list_test_cases, update_test_case,
};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(|| async { "Casetrack API" }))
        // Test case routes
        .route("/api/testcases", get(list_test_cases))
        .route("/api/testcases/create", post(create_test_case))
        .route("/api/testcases/{id}", get(get_test_case))
        .route("/api/testcases/{id}", put(update_test_case))
        .route("/api/testcases/{id}", delete(delete_test_case))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
