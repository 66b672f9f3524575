use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use casetrack::config::Config;
use casetrack::handlers::{self, TestCasePage};
use casetrack::models::{ApiEnvelope, TestCaseRequest, TestCaseView, TestPriority, TestStatus};
use casetrack::state::AppState;
use casetrack::{build_router, seed};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::test_case::list_test_cases,
        handlers::test_case::get_test_case,
        handlers::test_case::create_test_case,
        handlers::test_case::update_test_case,
        handlers::test_case::delete_test_case,
    ),
    components(schemas(
        TestCaseRequest,
        TestCaseView,
        TestCasePage,
        TestStatus,
        TestPriority,
        ApiEnvelope<TestCaseView>,
        ApiEnvelope<TestCasePage>,
    )),
    tags(
        (name = "Test Cases", description = "Test case management endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    let addr = config.server_addr();

    // Initialize application state (connects to MongoDB)
    tracing::info!("Connecting to MongoDB...");
    let state = AppState::new(config)
        .await
        .expect("Failed to initialize application state");
    tracing::info!("Database connection established");

    if state.config.seed_demo_data {
        seed::load_demo_data(state.store.as_ref())
            .await
            .expect("Failed to load demo data");
    }

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app).await.unwrap();
}
