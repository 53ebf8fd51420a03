//! Error types for the Inkstream client core

use thiserror::Error;

/// Main error type for Inkstream client operations
#[derive(Error, Debug)]
pub enum Error {
    /// The remote data service rejected the call or was unreachable
    #[error("Remote service error: {0}")]
    Remote(String),

    /// HTTP transport failure before a response was produced
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Requested document or record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Login attempted with an identity that has not completed email verification
    #[error("Email not verified: {0}")]
    Unverified(String),

    /// Required input missing or malformed, caught before any remote call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

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

    /// Missing or malformed service configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Operation requires an authenticated session
    #[error("Not authenticated")]
    NotAuthenticated,

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is the negative-result case (missing document,
    /// missing session). Callers treat these as `None`, not failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Result type alias using the Inkstream error
pub type Result<T> = std::result::Result<T, Error>;
