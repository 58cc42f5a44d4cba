//! Fixture helpers inserting records into the test database.
//!
//! Each submodule adds an accessor on [`TestContext`](crate::TestContext) returning a small
//! fixture struct, e.g. `test.event().insert_event(..)`.

pub mod agreement;
pub mod event;
pub mod helper;
pub mod job;
pub mod shift;
pub mod user;
