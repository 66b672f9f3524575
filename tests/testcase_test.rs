mod common;

use std::time::Duration;

use axum::http::StatusCode;
use casetrack::models::{TestPriority, TestStatus};
use serde_json::json;

use common::{Factory, TestApp};

// Well-formed ObjectId that no test case was ever created with
const UNKNOWN_ID: &str = "0123456789abcdef01234567";

#[tokio::test]
async fn test_create_test_case() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/testcases/create")
        .json(&json!({
            "title": "Login Test",
            "description": "Verify user login functionality",
            "status": "PENDING",
            "priority": "HIGH"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["count"].as_u64().unwrap(), 1);
    assert_eq!(body["statusCode"].as_u64().unwrap(), 201);
    assert_eq!(
        body["message"].as_str().unwrap(),
        "Test case created successfully"
    );

    let data = &body["data"];
    assert!(!data["id"].as_str().unwrap().is_empty());
    assert_eq!(data["title"].as_str().unwrap(), "Login Test");
    assert_eq!(data["status"].as_str().unwrap(), "PENDING");
    assert_eq!(data["priority"].as_str().unwrap(), "HIGH");
    // Same instant for both timestamps on creation
    assert_eq!(data["createdAt"], data["updatedAt"]);
}

#[tokio::test]
async fn test_create_test_case_minimal() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/testcases/create")
        .json(&json!({ "title": "Bare Minimum" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    let data = &body["data"];
    assert_eq!(data["title"].as_str().unwrap(), "Bare Minimum");
    // No server-side defaults are applied
    assert!(data["description"].is_null());
    assert!(data["status"].is_null());
    assert!(data["priority"].is_null());
}

#[tokio::test]
async fn test_create_test_case_blank_title() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/testcases/create")
        .json(&json!({ "title": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["statusCode"].as_u64().unwrap(), 400);
    assert_eq!(body["message"].as_str().unwrap(), "Title is required");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_create_test_case_missing_title() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/testcases/create")
        .json(&json!({ "description": "No title at all" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_test_case() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let created = factory
        .create_test_case("Logout Test", Some(TestStatus::Passed), Some(TestPriority::Low))
        .await;

    let response = app
        .server
        .get(&format!("/api/testcases/{}", created.id))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["count"].as_u64().unwrap(), 1);
    assert_eq!(
        body["message"].as_str().unwrap(),
        "Test case retrieved successfully"
    );
    assert_eq!(body["data"]["id"].as_str().unwrap(), created.id);
    assert_eq!(body["data"]["title"].as_str().unwrap(), "Logout Test");
}

#[tokio::test]
async fn test_get_test_case_not_found() {
    let app = TestApp::new().await;

    let response = app
        .server
        .get(&format!("/api/testcases/{}", UNKNOWN_ID))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["count"].as_u64().unwrap(), 0);
    assert_eq!(body["statusCode"].as_u64().unwrap(), 404);
    assert_eq!(body["message"].as_str().unwrap(), "Test case not found");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_list_test_cases_empty() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/testcases").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["count"].as_u64().unwrap(), 0);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["total"].as_u64().unwrap(), 0);
}

#[tokio::test]
async fn test_list_test_cases_filters() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    factory
        .create_test_case("A", Some(TestStatus::Passed), Some(TestPriority::High))
        .await;
    factory
        .create_test_case("B", Some(TestStatus::Failed), Some(TestPriority::Medium))
        .await;
    factory
        .create_test_case("C", Some(TestStatus::Pending), Some(TestPriority::Low))
        .await;

    // Status filter only
    let response = app.server.get("/api/testcases?status=PASSED").await;
    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["priority"].as_str().unwrap(), "HIGH");

    // Priority filter only
    let response = app.server.get("/api/testcases?priority=MEDIUM").await;
    let body: serde_json::Value = response.json();
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["status"].as_str().unwrap(), "FAILED");

    // Both filters
    let response = app
        .server
        .get("/api/testcases?status=FAILED&priority=MEDIUM")
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["count"].as_u64().unwrap(), 1);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);

    // No match under the combined filter
    let response = app
        .server
        .get("/api/testcases?status=PASSED&priority=LOW")
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["count"].as_u64().unwrap(), 0);

    // No filters
    let response = app.server.get("/api/testcases").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["count"].as_u64().unwrap(), 3);
}

#[tokio::test]
async fn test_list_test_cases_invalid_status() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/testcases?status=BOGUS").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_test_cases_pagination() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    factory.create_many_with_status(15, TestStatus::Pending).await;

    let response = app.server.get("/api/testcases?page=1&size=5").await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["count"].as_u64().unwrap(), 15);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"]["page"].as_u64().unwrap(), 1);
    assert_eq!(body["data"]["size"].as_u64().unwrap(), 5);
    assert_eq!(body["data"]["total"].as_u64().unwrap(), 15);

    // Stable insertion order: page 1 starts at the sixth created case
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items[0]["title"].as_str().unwrap(), "Case 5");
}

#[tokio::test]
async fn test_list_test_cases_page_past_the_end() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    factory.create_many_with_status(15, TestStatus::Pending).await;

    let response = app.server.get("/api/testcases?page=5&size=5").await;
    response.assert_status(StatusCode::OK);

    // Empty page, but the total still reflects every match
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["total"].as_u64().unwrap(), 15);
    assert_eq!(body["count"].as_u64().unwrap(), 15);
}

#[tokio::test]
async fn test_list_test_cases_default_paging() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    factory.create_many_with_status(12, TestStatus::Pending).await;

    let response = app.server.get("/api/testcases").await;

    // Defaults: page 0, size 10
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 10);
    assert_eq!(body["data"]["page"].as_u64().unwrap(), 0);
    assert_eq!(body["data"]["size"].as_u64().unwrap(), 10);
    assert_eq!(body["data"]["total"].as_u64().unwrap(), 12);
}

#[tokio::test]
async fn test_update_test_case() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let created = factory
        .create_test_case("Old Title", Some(TestStatus::Pending), Some(TestPriority::Low))
        .await;

    // Stored timestamps have millisecond precision
    tokio::time::sleep(Duration::from_millis(5)).await;

    let response = app
        .server
        .put(&format!("/api/testcases/{}", created.id))
        .json(&json!({
            "title": "New Title",
            "description": "Updated description",
            "status": "PASSED",
            "priority": "MEDIUM"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(
        body["message"].as_str().unwrap(),
        "Test case updated successfully"
    );

    let data = &body["data"];
    assert_eq!(data["id"].as_str().unwrap(), created.id);
    assert_eq!(data["title"].as_str().unwrap(), "New Title");
    assert_eq!(data["status"].as_str().unwrap(), "PASSED");
    assert_eq!(data["priority"].as_str().unwrap(), "MEDIUM");
    assert_ne!(data["createdAt"], data["updatedAt"]);
}

#[tokio::test]
async fn test_update_clears_omitted_fields() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let created = factory
        .create_test_case("Keep Me", Some(TestStatus::Failed), Some(TestPriority::High))
        .await;

    let response = app
        .server
        .put(&format!("/api/testcases/{}", created.id))
        .json(&json!({ "title": "Keep Me" }))
        .await;

    response.assert_status(StatusCode::OK);

    // Full replacement: omitted fields reset to absent rather than surviving
    let body: serde_json::Value = response.json();
    let data = &body["data"];
    assert!(data["description"].is_null());
    assert!(data["status"].is_null());
    assert!(data["priority"].is_null());
}

#[tokio::test]
async fn test_update_test_case_not_found() {
    let app = TestApp::new().await;

    let response = app
        .server
        .put(&format!("/api/testcases/{}", UNKNOWN_ID))
        .json(&json!({ "title": "Ghost" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"].as_str().unwrap(), "Test case not found");
}

#[tokio::test]
async fn test_update_test_case_blank_title() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let created = factory.create_test_case("Valid", None, None).await;

    let response = app
        .server
        .put(&format!("/api/testcases/{}", created.id))
        .json(&json!({ "title": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_test_case() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let created = factory.create_test_case("Doomed", None, None).await;

    let response = app
        .server
        .delete(&format!("/api/testcases/{}", created.id))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["count"].as_u64().unwrap(), 0);
    assert_eq!(
        body["message"].as_str().unwrap(),
        "Test case deleted successfully"
    );
    assert!(body["data"].is_null());

    // Gone for good
    let response = app
        .server
        .get(&format!("/api/testcases/{}", created.id))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_is_silent() {
    let app = TestApp::new().await;

    let response = app
        .server
        .delete(&format!("/api/testcases/{}", UNKNOWN_ID))
        .await;

    response.assert_status(StatusCode::OK);
}
