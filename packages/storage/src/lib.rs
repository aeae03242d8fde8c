// ABOUTME: Shared storage plumbing for Arbiter
// ABOUTME: Error types used by every SQLite-backed storage layer

pub mod datetime;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Record not found")]
    NotFound,
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Collapse sqlx's RowNotFound into the storage-level NotFound
    pub fn from_fetch(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StorageError::NotFound,
            other => StorageError::Sqlx(other),
        }
    }
}

/// Escape LIKE wildcards so a keyword matches literally. Queries binding
/// the result must carry an `ESCAPE '\'` clause.
pub fn escape_like(keyword: &str) -> String {
    keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
