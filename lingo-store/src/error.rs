//! Error types for the store layer.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A document's structure made it unstorable (e.g., locale codes at the root).
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend error.
    #[error("backend error: {0}")]
    Backend(String),
}
