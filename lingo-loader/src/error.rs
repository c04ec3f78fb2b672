//! Error types for the loader layer.

use lingo_store::StoreError;
use thiserror::Error;

/// Result type for loader operations.
pub type LoaderResult<T> = Result<T, LoaderError>;

/// A document whose top-level keys collide with configured locale codes.
///
/// Such a document is ambiguous: it cannot be told apart from a bare locale
/// map, so it is rejected before any store mutation.
#[derive(Debug, Clone, Error)]
#[error("top-level keys collide with configured locales: {keys:?}")]
pub struct InvalidStructureError {
    pub keys: Vec<String>,
}

/// Errors that can occur during a load cycle.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// i18n configuration absent from the site config. Fatal; the load cycle
    /// aborts before touching the store.
    #[error("i18n configuration is missing from the site config")]
    MissingI18nConfig,

    /// Document structure collides with the configured locales.
    #[error(transparent)]
    InvalidStructure(#[from] InvalidStructureError),

    /// The parser rejected an entry.
    #[error("parse error: {0}")]
    Parse(String),

    /// Store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
