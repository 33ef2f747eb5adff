//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_shop_tables: bool,
    accounts: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_shop_tables: false,
            accounts: Vec::new(),
        }
    }

    /// Add the account, product and shop session tables to the test database.
    pub fn with_shop_tables(mut self) -> Self {
        self.include_shop_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shopfront_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), shopfront_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(ShopSession)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an account with `email` and the test password.
    ///
    /// Requires the account table, e.g. via [`TestBuilder::with_shop_tables`].
    pub fn with_account(mut self, email: impl Into<String>) -> Self {
        self.accounts.push(email.into());
        self
    }

    /// Build the test context.
    ///
    /// Creates the tables first, then inserts the queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut tables = Vec::new();
        if self.include_shop_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.push(schema.create_table_from_entity(entity::prelude::Account));
            tables.push(schema.create_table_from_entity(entity::prelude::Product));
            tables.push(schema.create_table_from_entity(entity::prelude::ShopSession));
        }
        tables.extend(self.tables);
        setup.with_tables(tables).await?;

        // 2. Insert fixtures
        for email in self.accounts {
            setup.account().insert_account(&email).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
