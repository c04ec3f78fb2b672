use crate::{EntryParser, LoaderResult, ParseProps};
use lingo_types::{
    create_content_path, create_translation_id, parse_locale, BASE_PATH_FIELD,
    CONTENT_PATH_FIELD, LOCALE_FIELD, TRANSLATION_ID_FIELD, UNDETERMINED_LOCALE,
};
use serde_json::Value;
use std::sync::Arc;

/// How the locale of a source is determined at parse time.
pub(crate) enum LocaleMode {
    /// Derive from locale markers in the file path.
    FromPath { default_locale: String },
    /// Leave undetermined; store fan-out resolves it per locale.
    Undetermined,
}

/// Parser decorator that injects locale metadata into entry data before the
/// real parser runs.
///
/// Props without a file path pass through untouched. Parser failures on the
/// augmented data propagate unchanged.
pub(crate) struct MetadataParser {
    inner: Arc<dyn EntryParser>,
    mode: LocaleMode,
    locale_codes: Vec<String>,
    /// Content directory stripped from derived content paths.
    content_base: Option<String>,
    /// Site base path, injected verbatim as `basePath`.
    site_base: String,
}

impl MetadataParser {
    pub(crate) fn new(
        inner: Arc<dyn EntryParser>,
        mode: LocaleMode,
        locale_codes: Vec<String>,
        content_base: Option<String>,
        site_base: String,
    ) -> Self {
        Self {
            inner,
            mode,
            locale_codes,
            content_base,
            site_base,
        }
    }
}

impl EntryParser for MetadataParser {
    fn parse(&self, props: ParseProps) -> LoaderResult<Value> {
        let Some(file_path) = props.file_path.clone() else {
            return self.inner.parse(props);
        };
        let locale = match &self.mode {
            LocaleMode::FromPath { default_locale } => {
                parse_locale(&file_path, &self.locale_codes, default_locale)
            }
            LocaleMode::Undetermined => UNDETERMINED_LOCALE.to_string(),
        };
        let known_locale = match self.mode {
            LocaleMode::FromPath { .. } => Some(locale.as_str()),
            LocaleMode::Undetermined => None,
        };
        let translation_id = create_translation_id(&file_path, known_locale);
        let content_path =
            create_content_path(&file_path, self.content_base.as_deref(), known_locale);

        let mut props = props;
        if let Value::Object(map) = &mut props.data {
            map.insert(LOCALE_FIELD.to_string(), Value::String(locale));
            map.insert(
                TRANSLATION_ID_FIELD.to_string(),
                Value::String(translation_id),
            );
            map.insert(CONTENT_PATH_FIELD.to_string(), Value::String(content_path));
            map.insert(
                BASE_PATH_FIELD.to_string(),
                Value::String(self.site_base.clone()),
            );
        }
        self.inner.parse(props)
    }
}
