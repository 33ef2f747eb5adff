//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context
//! includes an in-memory SQLite database, a session backed by an in-memory
//! store, and temporary directories for uploads and static assets.

use std::{path::PathBuf, sync::Arc};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new().with_shop_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Insert fixtures
/// let account = test.account().insert_account(TEST_EMAIL).await?;
/// test.product().insert_product(account.id, "Book").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for tests of session-backed helpers
    pub session: Session,
    /// Store backing `session`, also usable as store for a full app
    pub session_store: MemoryStore,
    /// Temporary directory uploads are written to, removed on drop
    pub upload_dir: TempDir,
    /// Temporary directory static assets are served from, removed on drop
    pub public_dir: TempDir,
}

impl TestContext {
    /// Convert database and upload directory into any type that can be constructed from them
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main shopfront crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, PathBuf)>,
    {
        T::from((self.db.clone(), self.upload_dir.path().to_path_buf()))
    }

    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    /// - `Err(TestError::IoError)` - Temporary directories could not be created
    pub(crate) async fn new() -> Result<Self, TestError> {
        let session_store = MemoryStore::default();
        let session = Session::new(None, Arc::new(session_store.clone()), None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            session_store,
            upload_dir: tempfile::tempdir()?,
            public_dir: tempfile::tempdir()?,
        })
    }

    /// Create database tables from schema statements.
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
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
