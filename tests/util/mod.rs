//! Helpers shared by the integration tests.

mod test_utils;

pub use test_utils::{json_body, login, uri, TestContextExt};
