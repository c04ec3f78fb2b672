use super::metadata::{LocaleMode, MetadataParser};
use super::Loader;
use crate::{LoaderContext, LoaderError, LoaderResult, LocaleSplitStore};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Wraps a base loader whose documents embed locale-keyed subtrees.
///
/// Parsed entries are tagged with the undetermined locale and fanned out by
/// a [`LocaleSplitStore`] into one record per locale actually present in the
/// document. Entries without any configured locale key pass through under
/// their original id.
pub struct SplitLocaleLoader<L> {
    inner: L,
    /// Content directory stripped from derived content paths. Single-file
    /// sources have none.
    base: Option<String>,
}

impl<L> SplitLocaleLoader<L> {
    pub fn new(inner: L, base: Option<String>) -> Self {
        Self { inner, base }
    }
}

#[async_trait]
impl<L: Loader> Loader for SplitLocaleLoader<L> {
    fn name(&self) -> &str {
        "split-locale-loader"
    }

    async fn load(&self, context: &LoaderContext) -> LoaderResult<()> {
        let i18n = context
            .config
            .i18n
            .as_ref()
            .ok_or(LoaderError::MissingI18nConfig)?;
        let locale_codes = i18n.locale_codes();
        info!(loader = self.name(), locales = ?locale_codes, "starting load cycle");

        let parser = MetadataParser::new(
            context.parser.clone(),
            LocaleMode::Undetermined,
            locale_codes.clone(),
            self.base.clone(),
            context.config.base.clone(),
        );
        let store = Arc::new(LocaleSplitStore::new(context.store.clone(), locale_codes));
        let wrapped = context.with_parser(Arc::new(parser)).with_store(store);
        self.inner.load(&wrapped).await
    }
}
