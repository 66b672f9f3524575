use casetrack::models::{TestCaseRequest, TestCaseView, TestPriority, TestStatus};
use casetrack::state::AppState;

/// Factory for creating test data
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Create a test case with the given status and priority
    pub async fn create_test_case(
        &self,
        title: &str,
        status: Option<TestStatus>,
        priority: Option<TestPriority>,
    ) -> TestCaseView {
        let request = TestCaseRequest {
            title: title.to_string(),
            description: Some(format!("{} description", title)),
            status,
            priority,
        };

        self.state.service.create(request).await.unwrap()
    }

    /// Create `count` test cases sharing one status
    pub async fn create_many_with_status(&self, count: usize, status: TestStatus) {
        for i in 0..count {
            self.create_test_case(&format!("Case {}", i), Some(status), None)
                .await;
        }
    }
}
