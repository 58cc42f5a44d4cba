//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. Table creation is queued and executed during the final `build()` call, in
//! foreign key order.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_registration_tables: bool,
    include_agreement_tables: bool,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_registration_tables: false,
            include_agreement_tables: false,
        }
    }

    /// Add every table of the event model.
    ///
    /// Creates AppUser, Event, EventAdmin, Job, Shift, Helper and HelperShift.
    pub fn with_registration_tables(mut self) -> Self {
        self.include_registration_tables = true;
        self
    }

    /// Add AppUser, Agreement and UserAgreement.
    pub fn with_agreement_tables(mut self) -> Self {
        self.include_agreement_tables = true;
        self
    }

    /// Add a single entity table.
    ///
    /// Tables added this way are created after the table groups, in the order given.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context and create all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        let mut all_tables = Vec::new();

        if self.include_registration_tables || self.include_agreement_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::AppUser));
        }

        if self.include_registration_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Event),
                schema.create_table_from_entity(entity::prelude::EventAdmin),
                schema.create_table_from_entity(entity::prelude::Job),
                schema.create_table_from_entity(entity::prelude::Shift),
                schema.create_table_from_entity(entity::prelude::Helper),
                schema.create_table_from_entity(entity::prelude::HelperShift),
            ]);
        }

        if self.include_agreement_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Agreement),
                schema.create_table_from_entity(entity::prelude::UserAgreement),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        Ok(setup)
    }
}
