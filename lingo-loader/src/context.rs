use crate::LoaderResult;
use lingo_store::ContentStore;
use lingo_types::I18nConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Site configuration surface consumed by loaders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site base path prefix, merged into every entry as `basePath`.
    #[serde(default = "default_base")]
    pub base: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n: Option<I18nConfig>,
}

fn default_base() -> String {
    "/".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            i18n: None,
        }
    }
}

/// Raw properties of one entry, handed to the parser before commit.
#[derive(Debug, Clone)]
pub struct ParseProps {
    pub id: String,
    pub file_path: Option<String>,
    pub data: Value,
}

/// Validates and finalizes raw entry data before it is committed.
///
/// Base loaders call this for every source they read; wrappers decorate it
/// to inject locale metadata on the way through.
pub trait EntryParser: Send + Sync {
    fn parse(&self, props: ParseProps) -> LoaderResult<Value>;
}

/// Parser that accepts entry data unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityParser;

impl EntryParser for IdentityParser {
    fn parse(&self, props: ParseProps) -> LoaderResult<Value> {
        Ok(props.data)
    }
}

/// Everything a loader needs for one load cycle.
///
/// Wrappers never mutate the caller's context; interception builds a new one
/// with a decorated parser or store and threads it down to the base loader.
#[derive(Clone)]
pub struct LoaderContext {
    pub config: SiteConfig,
    pub parser: Arc<dyn EntryParser>,
    pub store: Arc<dyn ContentStore>,
}

impl LoaderContext {
    /// Creates a context with the identity parser.
    pub fn new(config: SiteConfig, store: Arc<dyn ContentStore>) -> Self {
        Self {
            config,
            parser: Arc::new(IdentityParser),
            store,
        }
    }

    /// Same cycle, different parser.
    pub fn with_parser(&self, parser: Arc<dyn EntryParser>) -> Self {
        Self {
            config: self.config.clone(),
            parser,
            store: self.store.clone(),
        }
    }

    /// Same cycle, different store.
    pub fn with_store(&self, store: Arc<dyn ContentStore>) -> Self {
        Self {
            config: self.config.clone(),
            parser: self.parser.clone(),
            store,
        }
    }
}
