pub mod response;
pub mod test_case;

pub use response::*;
pub use test_case::*;
