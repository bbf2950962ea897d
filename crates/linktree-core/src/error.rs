//! Error types for Link Tree

use thiserror::Error;

/// Main error type for Link Tree operations
#[derive(Error, Debug)]
pub enum LinkTreeError {
    /// Two entries in a link list share a title
    #[error("Duplicate link title: {0}")]
    DuplicateTitle(String),

    /// A theme name that is neither "light" nor "dark"
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    /// Error during storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using LinkTreeError
pub type LinkTreeResult<T> = Result<T, LinkTreeError>;
