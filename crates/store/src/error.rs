use domain::PublishError;
use thiserror::Error;

/// Errors that can occur when saving or loading items.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The store refused the commit; nothing was written.
    #[error("Commit rejected: {0}")]
    CommitRejected(String),

    /// The commit succeeded but publishing one of its events failed.
    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
