use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use crate::error::AppResult;
use crate::models::{TestCase, TestPriority, TestStatus};
use crate::repositories::{Page, TestCaseStore};

const COLLECTION: &str = "test_cases";

/// MongoDB-backed test case store
#[derive(Clone)]
pub struct MongoTestCaseStore {
    collection: Collection<TestCase>,
}

impl MongoTestCaseStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<TestCase>(COLLECTION),
        }
    }

    /// Run a filtered, paginated query and count the total matches.
    ///
    /// Sorted by `_id` ascending so successive reads see the same stable
    /// insertion order.
    async fn find_page(
        &self,
        filter: Document,
        page: u64,
        size: u64,
    ) -> AppResult<Page<TestCase>> {
        let total = self.collection.count_documents(filter.clone()).await?;

        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "_id": 1 })
            .skip(page.saturating_mul(size))
            .limit(size as i64)
            .await?;

        let items = cursor.try_collect().await?;
        Ok(Page { items, total })
    }
}

#[async_trait]
impl TestCaseStore for MongoTestCaseStore {
    async fn save(&self, mut case: TestCase) -> AppResult<TestCase> {
        match case.id {
            Some(id) => {
                self.collection
                    .replace_one(doc! { "_id": id }, &case)
                    .await?;
                Ok(case)
            }
            None => {
                let result = self.collection.insert_one(&case).await?;
                case.id = result.inserted_id.as_object_id();
                Ok(case)
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<TestCase>> {
        let oid = match ObjectId::parse_str(id) {
            Ok(oid) => oid,
            // A malformed id cannot name a stored document
            Err(_) => return Ok(None),
        };

        let case = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(case)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let oid = match ObjectId::parse_str(id) {
            Ok(oid) => oid,
            Err(_) => return Ok(()),
        };

        self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<()> {
        self.collection.delete_many(doc! {}).await?;
        Ok(())
    }

    async fn find_all(&self, page: u64, size: u64) -> AppResult<Page<TestCase>> {
        self.find_page(doc! {}, page, size).await
    }

    async fn find_by_status(
        &self,
        status: TestStatus,
        page: u64,
        size: u64,
    ) -> AppResult<Page<TestCase>> {
        self.find_page(doc! { "status": status.as_str() }, page, size)
            .await
    }

    async fn find_by_priority(
        &self,
        priority: TestPriority,
        page: u64,
        size: u64,
    ) -> AppResult<Page<TestCase>> {
        self.find_page(doc! { "priority": priority.as_str() }, page, size)
            .await
    }

    async fn find_by_status_and_priority(
        &self,
        status: TestStatus,
        priority: TestPriority,
        page: u64,
        size: u64,
    ) -> AppResult<Page<TestCase>> {
        self.find_page(
            doc! { "status": status.as_str(), "priority": priority.as_str() },
            page,
            size,
        )
        .await
    }
}
