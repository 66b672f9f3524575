pub mod common;
pub mod test_case;

pub use common::{validate_optional, validate_required};
pub use test_case::{
    create_test_case, delete_test_case, get_test_case, list_test_cases, update_test_case,
    ListTestCasesParams, TestCasePage,
};
