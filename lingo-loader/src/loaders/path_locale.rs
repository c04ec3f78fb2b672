use super::metadata::{LocaleMode, MetadataParser};
use super::Loader;
use crate::{LoaderContext, LoaderError, LoaderResult};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Wraps a base loader whose sources carry their locale in the file path,
/// either as a directory segment (`de-CH/about.mdx`) or a filename suffix
/// (`about.de-CH.mdx`).
///
/// Each entry stays a single store record; only the parse step is decorated,
/// deriving locale, translation id, and content path up front.
pub struct PathLocaleLoader<L> {
    inner: L,
    base: Option<String>,
}

impl<L> PathLocaleLoader<L> {
    pub fn new(inner: L, base: Option<String>) -> Self {
        Self { inner, base }
    }
}

#[async_trait]
impl<L: Loader> Loader for PathLocaleLoader<L> {
    fn name(&self) -> &str {
        "path-locale-loader"
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
            LocaleMode::FromPath {
                default_locale: i18n.default_locale.clone(),
            },
            locale_codes,
            self.base.clone(),
            context.config.base.clone(),
        );
        let wrapped = context.with_parser(Arc::new(parser));
        self.inner.load(&wrapped).await
    }
}
