use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppResult;
use crate::handlers::{validate_optional, validate_required};
use crate::models::{ApiEnvelope, TestCaseRequest, TestCaseView, TestPriority, TestStatus};
use crate::state::AppState;

const TITLE_MAX: usize = 200;
const DESCRIPTION_MAX: usize = 2000;

// ============ Request/Response DTOs ============

/// Query parameters for the list endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTestCasesParams {
    /// Filter by status
    pub status: Option<TestStatus>,
    /// Filter by priority
    pub priority: Option<TestPriority>,
    #[param(default = 0, minimum = 0)]
    pub page: Option<u64>,
    #[param(default = 10, minimum = 1, maximum = 100)]
    pub size: Option<u64>,
}

/// One page of test cases; `total` counts matches across all pages
#[derive(Debug, Serialize, ToSchema)]
pub struct TestCasePage {
    pub items: Vec<TestCaseView>,
    pub page: u64,
    pub size: u64,
    pub total: u64,
}

// ============ Handlers ============

/// List test cases with optional status/priority filters
#[utoipa::path(
    get,
    path = "/api/testcases",
    params(ListTestCasesParams),
    responses(
        (status = 200, description = "Page of test cases", body = ApiEnvelope<TestCasePage>),
        (status = 400, description = "Malformed filter or pagination parameter")
    ),
    tag = "Test Cases"
)]
pub async fn list_test_cases(
    State(state): State<AppState>,
    Query(params): Query<ListTestCasesParams>,
) -> AppResult<Json<ApiEnvelope<TestCasePage>>> {
    let page = params.page.unwrap_or(0);
    let size = params.size.unwrap_or(10).clamp(1, 100);

    let (items, total) = state
        .service
        .list(params.status, params.priority, page, size)
        .await?;

    Ok(Json(ApiEnvelope::ok(
        total,
        "Test cases retrieved successfully",
        TestCasePage {
            items,
            page,
            size,
            total,
        },
    )))
}

/// Get a test case by ID
#[utoipa::path(
    get,
    path = "/api/testcases/{id}",
    params(
        ("id" = String, Path, description = "Test case ID")
    ),
    responses(
        (status = 200, description = "Test case details", body = ApiEnvelope<TestCaseView>),
        (status = 404, description = "Test case not found")
    ),
    tag = "Test Cases"
)]
pub async fn get_test_case(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiEnvelope<TestCaseView>>> {
    let view = state.service.get(&id).await?;
    Ok(Json(ApiEnvelope::ok(
        1,
        "Test case retrieved successfully",
        view,
    )))
}

/// Create a new test case
#[utoipa::path(
    post,
    path = "/api/testcases/create",
    request_body = TestCaseRequest,
    responses(
        (status = 201, description = "Test case created successfully", body = ApiEnvelope<TestCaseView>),
        (status = 400, description = "Validation error")
    ),
    tag = "Test Cases"
)]
pub async fn create_test_case(
    State(state): State<AppState>,
    Json(payload): Json<TestCaseRequest>,
) -> AppResult<(StatusCode, Json<ApiEnvelope<TestCaseView>>)> {
    validate_required(&payload.title, "Title", TITLE_MAX)?;
    validate_optional(&payload.description, "Description", DESCRIPTION_MAX)?;

    let view = state.service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiEnvelope::created("Test case created successfully", view)),
    ))
}

/// Update a test case (full field replacement)
#[utoipa::path(
    put,
    path = "/api/testcases/{id}",
    params(
        ("id" = String, Path, description = "Test case ID")
    ),
    request_body = TestCaseRequest,
    responses(
        (status = 200, description = "Test case updated successfully", body = ApiEnvelope<TestCaseView>),
        (status = 404, description = "Test case not found"),
        (status = 400, description = "Validation error")
    ),
    tag = "Test Cases"
)]
pub async fn update_test_case(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<TestCaseRequest>,
) -> AppResult<Json<ApiEnvelope<TestCaseView>>> {
    validate_required(&payload.title, "Title", TITLE_MAX)?;
    validate_optional(&payload.description, "Description", DESCRIPTION_MAX)?;

    let view = state.service.update(&id, payload).await?;
    Ok(Json(ApiEnvelope::ok(
        1,
        "Test case updated successfully",
        view,
    )))
}

/// Delete a test case; deleting an unknown ID succeeds silently
#[utoipa::path(
    delete,
    path = "/api/testcases/{id}",
    params(
        ("id" = String, Path, description = "Test case ID")
    ),
    responses(
        (status = 200, description = "Test case deleted successfully")
    ),
    tag = "Test Cases"
)]
pub async fn delete_test_case(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiEnvelope<()>>> {
    state.service.delete(&id).await?;
    Ok(Json(ApiEnvelope::no_data("Test case deleted successfully")))
}
