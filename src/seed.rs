use crate::error::AppResult;
use crate::models::{TestCase, TestPriority, TestStatus};
use crate::repositories::TestCaseStore;

/// Wipe the collection and load the canonical demo test cases.
///
/// Destroys existing data; only run when `SEED_DEMO_DATA` is set.
pub async fn load_demo_data(store: &dyn TestCaseStore) -> AppResult<()> {
    let demo: [(&str, &str, TestStatus, TestPriority); 7] = [
        (
            "Login Test",
            "Verify user login functionality",
            TestStatus::Pending,
            TestPriority::High,
        ),
        (
            "Registration Test",
            "Ensure registration works correctly",
            TestStatus::InProgress,
            TestPriority::Medium,
        ),
        (
            "Logout Test",
            "Test user logout functionality",
            TestStatus::Passed,
            TestPriority::Low,
        ),
        (
            "Payment Processing Test",
            "Ensure payment transactions are processed correctly",
            TestStatus::Failed,
            TestPriority::High,
        ),
        (
            "Profile Update Test",
            "Verify that users can update their profile details",
            TestStatus::InProgress,
            TestPriority::Medium,
        ),
        (
            "Password Reset Test",
            "Check if users can reset their password",
            TestStatus::Pending,
            TestPriority::High,
        ),
        (
            "Search Functionality Test",
            "Ensure that the search feature returns correct results",
            TestStatus::Passed,
            TestPriority::Low,
        ),
    ];
    let count = demo.len();

    store.delete_all().await?;

    for (title, description, status, priority) in demo {
        let now = bson::DateTime::now();
        store
            .save(TestCase {
                id: None,
                title: title.to_string(),
                description: Some(description.to_string()),
                status: Some(status),
                priority: Some(priority),
                created_at: now,
                updated_at: now,
            })
            .await?;
    }

    tracing::info!("Loaded {} demo test cases", count);
    Ok(())
}
