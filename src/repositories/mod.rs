pub mod memory;
pub mod mongo;

pub use memory::InMemoryStore;
pub use mongo::MongoTestCaseStore;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{TestCase, TestPriority, TestStatus};

/// One page of matching entities plus the total match count across all pages
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

/// Persistence gateway for test cases.
///
/// Pagination is zero-based and offset-style: skip `page * size`, take
/// `size`. Items come back in stable insertion order. Deletes give no signal
/// distinguishing "removed" from "did not exist".
#[async_trait]
pub trait TestCaseStore: Send + Sync {
    /// Insert when the entity has no id (the store assigns one), replace by
    /// id otherwise. Returns the persisted entity with its id set.
    async fn save(&self, case: TestCase) -> AppResult<TestCase>;

    /// Unknown and malformed ids both resolve to `None`
    async fn find_by_id(&self, id: &str) -> AppResult<Option<TestCase>>;

    async fn delete_by_id(&self, id: &str) -> AppResult<()>;

    /// Remove every stored test case (demo-data seeding)
    async fn delete_all(&self) -> AppResult<()>;

    async fn find_all(&self, page: u64, size: u64) -> AppResult<Page<TestCase>>;

    async fn find_by_status(
        &self,
        status: TestStatus,
        page: u64,
        size: u64,
    ) -> AppResult<Page<TestCase>>;

    async fn find_by_priority(
        &self,
        priority: TestPriority,
        page: u64,
        size: u64,
    ) -> AppResult<Page<TestCase>>;

    async fn find_by_status_and_priority(
        &self,
        status: TestStatus,
        priority: TestPriority,
        page: u64,
        size: u64,
    ) -> AppResult<Page<TestCase>>;
}
