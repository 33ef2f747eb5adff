//! Shared application state.

use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::model::upload::UploadStorage;

/// Application state shared by every route handler and stateful pipeline stage.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool to the shop database.
    pub db: DatabaseConnection,
    /// Location accepted image uploads are written to and served from.
    pub uploads: UploadStorage,
}

impl From<(DatabaseConnection, PathBuf)> for AppState {
    fn from((db, upload_dir): (DatabaseConnection, PathBuf)) -> Self {
        Self {
            db,
            uploads: UploadStorage::new(upload_dir),
        }
    }
}
