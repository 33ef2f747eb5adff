use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error(transparent)]
    SessionStoreError(#[from] tower_sessions::session_store::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Failed to hash fixture password: {0}")]
    PasswordHashError(String),
}
