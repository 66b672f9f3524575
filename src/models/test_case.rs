use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Execution state of a test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStatus {
    Pending,
    InProgress,
    Passed,
    Failed,
}

impl TestStatus {
    /// Wire/storage string, used for equality filters
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Pending => "PENDING",
            TestStatus::InProgress => "IN_PROGRESS",
            TestStatus::Passed => "PASSED",
            TestStatus::Failed => "FAILED",
        }
    }
}

/// Priority of a test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestPriority {
    Low,
    Medium,
    High,
}

impl TestPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestPriority::Low => "LOW",
            TestPriority::Medium => "MEDIUM",
            TestPriority::High => "HIGH",
        }
    }
}

/// Test case document stored in the `test_cases` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    /// Assigned by the store on first save; immutable afterward
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TestStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TestPriority>,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

/// Inbound payload for create and update.
///
/// Update applies full-replacement semantics per field: an omitted optional
/// field clears the stored value rather than preserving it.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TestCaseRequest {
    /// A missing title deserializes to "" and fails the non-blank check
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TestStatus>,
    pub priority: Option<TestPriority>,
}

/// Outbound representation of a test case (read-only for the caller)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TestStatus>,
    pub priority: Option<TestPriority>,
    #[schema(value_type = String)]
    pub created_at: OffsetDateTime,
    #[schema(value_type = String)]
    pub updated_at: OffsetDateTime,
}

impl From<TestCase> for TestCaseView {
    fn from(case: TestCase) -> Self {
        Self {
            // Only entities that never went through the store lack an id
            id: case.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: case.title,
            description: case.description,
            status: case.status,
            priority: case.priority,
            created_at: case.created_at.to_time_0_3(),
            updated_at: case.updated_at.to_time_0_3(),
        }
    }
}
