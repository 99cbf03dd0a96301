//! Error types and result types for book store operations.
//!
//! Every storage operation returns [`StoreResult<T>`]. The HTTP layer decides which
//! variants are safe to show to a client and which ones are logged and hidden.

use bson::error::Error as BsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a book store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Serialization/deserialization error when converting stored documents.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Error during store initialization or connection setup.
    #[error("Initialization error: {0}")]
    Initialization(String),
    /// The submitted book is missing a required field.
    #[error("{0}")]
    InvalidDocument(String),
    /// No book is stored under the given identifier.
    /// The argument is the identifier exactly as the caller supplied it.
    #[error("Book not found: {0}")]
    BookNotFound(String),
    /// An error occurred in the underlying storage backend.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for book store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<BsonError> for StoreError {
    fn from(err: BsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
