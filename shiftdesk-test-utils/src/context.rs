//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context holds an
//! in-memory SQLite database and a session backed by an in-memory store, which together
//! are everything a handler or service needs to run in a test.

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let test = TestBuilder::new().with_registration_tables().build().await?;
///
/// let event = test.event().insert_event("summer-fair", true).await?;
/// let job = test.job().insert_job(event.id, "Bar", 0).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for the simulated client
    pub session: Session,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to the application state without creating a circular
    /// dependency between the test-utils crate and the main crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Create a new test context with an empty in-memory database.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    /// Executes CREATE TABLE statements, in order.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
