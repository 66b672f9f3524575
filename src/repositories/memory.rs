use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tokio::sync::Mutex;

use crate::error::AppResult;
use crate::models::{TestCase, TestPriority, TestStatus};
use crate::repositories::{Page, TestCaseStore};

/// In-memory store for unit testing and DB-free local runs.
///
/// Keeps entities in insertion order, matching the stable ordering contract
/// of the MongoDB store.
#[derive(Clone)]
pub struct InMemoryStore {
    cases: Arc<Mutex<Vec<TestCase>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            cases: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn paginate(matching: Vec<TestCase>, page: u64, size: u64) -> Page<TestCase> {
        let total = matching.len() as u64;
        let skip = page.saturating_mul(size) as usize;
        let items = matching.into_iter().skip(skip).take(size as usize).collect();
        Page { items, total }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TestCaseStore for InMemoryStore {
    async fn save(&self, mut case: TestCase) -> AppResult<TestCase> {
        let mut cases = self.cases.lock().await;
        match case.id {
            Some(id) => {
                if let Some(existing) = cases.iter_mut().find(|c| c.id == Some(id)) {
                    *existing = case.clone();
                } else {
                    cases.push(case.clone());
                }
            }
            None => {
                case.id = Some(ObjectId::new());
                cases.push(case.clone());
            }
        }
        Ok(case)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<TestCase>> {
        let oid = match ObjectId::parse_str(id) {
            Ok(oid) => oid,
            Err(_) => return Ok(None),
        };

        let cases = self.cases.lock().await;
        Ok(cases.iter().find(|c| c.id == Some(oid)).cloned())
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let oid = match ObjectId::parse_str(id) {
            Ok(oid) => oid,
            Err(_) => return Ok(()),
        };

        let mut cases = self.cases.lock().await;
        cases.retain(|c| c.id != Some(oid));
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<()> {
        self.cases.lock().await.clear();
        Ok(())
    }

    async fn find_all(&self, page: u64, size: u64) -> AppResult<Page<TestCase>> {
        let cases = self.cases.lock().await;
        Ok(Self::paginate(cases.clone(), page, size))
    }

    async fn find_by_status(
        &self,
        status: TestStatus,
        page: u64,
        size: u64,
    ) -> AppResult<Page<TestCase>> {
        let cases = self.cases.lock().await;
        let matching = cases
            .iter()
            .filter(|c| c.status == Some(status))
            .cloned()
            .collect();
        Ok(Self::paginate(matching, page, size))
    }

    async fn find_by_priority(
        &self,
        priority: TestPriority,
        page: u64,
        size: u64,
    ) -> AppResult<Page<TestCase>> {
        let cases = self.cases.lock().await;
        let matching = cases
            .iter()
            .filter(|c| c.priority == Some(priority))
            .cloned()
            .collect();
        Ok(Self::paginate(matching, page, size))
    }

    async fn find_by_status_and_priority(
        &self,
        status: TestStatus,
        priority: TestPriority,
        page: u64,
        size: u64,
    ) -> AppResult<Page<TestCase>> {
        let cases = self.cases.lock().await;
        let matching = cases
            .iter()
            .filter(|c| c.status == Some(status) && c.priority == Some(priority))
            .cloned()
            .collect();
        Ok(Self::paginate(matching, page, size))
    }
}
