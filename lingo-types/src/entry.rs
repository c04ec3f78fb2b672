use serde::{Deserialize, Serialize};

/// Reserved data field holding the entry's locale code.
pub const LOCALE_FIELD: &str = "locale";
/// Reserved data field linking all locale variants of one source document.
pub const TRANSLATION_ID_FIELD: &str = "translationId";
/// Reserved data field holding the locale-independent content path.
pub const CONTENT_PATH_FIELD: &str = "contentPath";
/// Reserved data field holding the site's base path prefix.
pub const BASE_PATH_FIELD: &str = "basePath";

/// One content record flowing through the loader pipeline.
///
/// The `data` field holds the arbitrarily nested document body. Entries are
/// ephemeral while in flight; the store owns them once committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    /// Source origin. Absent for synthetic entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    pub data: serde_json::Value,
    /// Raw body text, when the source format carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Content fingerprint used by the store for change detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

impl Entry {
    /// Creates an entry with just an id and document body.
    pub fn new(id: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            file_path: None,
            data,
            body: None,
            digest: None,
        }
    }

    /// Sets the source file path.
    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// Sets the raw body text.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content digest.
    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.digest = Some(digest.into());
        self
    }

    /// Extracts a string value from `data` using a JSON pointer (e.g., "/title").
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.data.pointer(pointer).and_then(|v| v.as_str())
    }
}
