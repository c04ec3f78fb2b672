//! Loader wrappers composing locale awareness around any base loader.

mod metadata;
mod path_locale;
mod split_locale;

pub use path_locale::PathLocaleLoader;
pub use split_locale::SplitLocaleLoader;

use crate::{LoaderContext, LoaderResult};
use async_trait::async_trait;

/// A pluggable content loader.
///
/// Base loaders read sources and push parsed entries through the context's
/// parser and store; wrappers decorate the context and delegate. One `load`
/// call corresponds to one build or hot-reload cycle, and the host guarantees
/// calls never overlap.
#[async_trait]
pub trait Loader: Send + Sync {
    /// Loader name, for diagnostics.
    fn name(&self) -> &str;

    /// Runs one load cycle against the given context.
    async fn load(&self, context: &LoaderContext) -> LoaderResult<()>;
}
