use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{TestCase, TestCaseRequest, TestCaseView, TestPriority, TestStatus};
use crate::repositories::TestCaseStore;

/// Core logic between the HTTP boundary and the store: filter dispatch,
/// entity/view mapping, timestamp stamping, not-found semantics.
///
/// The store is injected at construction; the service itself is stateless
/// across calls.
#[derive(Clone)]
pub struct TestCaseService {
    store: Arc<dyn TestCaseStore>,
}

impl TestCaseService {
    pub fn new(store: Arc<dyn TestCaseStore>) -> Self {
        Self { store }
    }

    /// List one page of test cases.
    ///
    /// Dispatches to exactly one store query depending on which filters are
    /// present. Returns the page of views plus the total match count across
    /// all pages; a page index past the end yields an empty page with the
    /// true total.
    pub async fn list(
        &self,
        status: Option<TestStatus>,
        priority: Option<TestPriority>,
        page: u64,
        size: u64,
    ) -> AppResult<(Vec<TestCaseView>, u64)> {
        tracing::info!(?status, ?priority, page, size, "Fetching test cases");

        let result = match (status, priority) {
            (Some(status), Some(priority)) => {
                self.store
                    .find_by_status_and_priority(status, priority, page, size)
                    .await?
            }
            (Some(status), None) => self.store.find_by_status(status, page, size).await?,
            (None, Some(priority)) => self.store.find_by_priority(priority, page, size).await?,
            (None, None) => self.store.find_all(page, size).await?,
        };

        tracing::debug!(
            "Retrieved {} of {} test cases",
            result.items.len(),
            result.total
        );

        let views = result.items.into_iter().map(TestCaseView::from).collect();
        Ok((views, result.total))
    }

    pub async fn get(&self, id: &str) -> AppResult<TestCaseView> {
        tracing::info!("Fetching test case with id {}", id);

        let case = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Test case".to_string()))?;

        Ok(case.into())
    }

    /// Create a new test case. The id is assigned by the store; a
    /// caller-supplied id is never accepted.
    pub async fn create(&self, request: TestCaseRequest) -> AppResult<TestCaseView> {
        tracing::info!("Creating test case with title {}", request.title);

        if request.title.trim().is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }

        // Same instant for both timestamps on creation
        let now = bson::DateTime::now();
        let case = TestCase {
            id: None,
            title: request.title,
            description: request.description,
            status: request.status,
            priority: request.priority,
            created_at: now,
            updated_at: now,
        };

        let saved = self.store.save(case).await?;
        tracing::debug!(id = ?saved.id, "Created test case");
        Ok(saved.into())
    }

    /// Overlay every request field onto the existing entity (omitted optional
    /// fields clear the stored value), leaving id and created_at untouched.
    pub async fn update(&self, id: &str, request: TestCaseRequest) -> AppResult<TestCaseView> {
        tracing::info!("Updating test case with id {}", id);

        if request.title.trim().is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }

        let mut existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Test case".to_string()))?;

        existing.title = request.title;
        existing.description = request.description;
        existing.status = request.status;
        existing.priority = request.priority;
        existing.updated_at = bson::DateTime::now();

        let updated = self.store.save(existing).await?;
        tracing::debug!(id = ?updated.id, "Updated test case");
        Ok(updated.into())
    }

    /// Deleting an unknown id is a silent no-op, mirroring the store contract
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        tracing::info!("Deleting test case with id {}", id);
        self.store.delete_by_id(id).await
    }
}
