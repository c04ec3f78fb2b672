use serde::{Deserialize, Serialize};

/// Sentinel locale for entries whose locale cannot be derived from context.
///
/// Entries parsed from multi-locale documents carry this value until fan-out
/// resolves them into per-locale records.
pub const UNDETERMINED_LOCALE: &str = "und";

/// One locale in the site configuration: either a bare code, or a group of
/// codes sharing a URL path segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocaleSpec {
    Code(String),
    Group { path: String, codes: Vec<String> },
}

/// The i18n section of the site configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    pub locales: Vec<LocaleSpec>,
    pub default_locale: String,
}

impl I18nConfig {
    /// Creates a config from bare locale codes.
    pub fn new<I, S>(locales: I, default_locale: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locales: locales
                .into_iter()
                .map(|code| LocaleSpec::Code(code.into()))
                .collect(),
            default_locale: default_locale.into(),
        }
    }

    /// Flattens locale groups into the full list of configured codes.
    pub fn locale_codes(&self) -> Vec<String> {
        self.locales
            .iter()
            .flat_map(|spec| match spec {
                LocaleSpec::Code(code) => vec![code.clone()],
                LocaleSpec::Group { codes, .. } => codes.clone(),
            })
            .collect()
    }

    /// Returns whether `code` is one of the configured locale codes.
    pub fn is_locale(&self, code: &str) -> bool {
        self.locales.iter().any(|spec| match spec {
            LocaleSpec::Code(c) => c == code,
            LocaleSpec::Group { codes, .. } => codes.iter().any(|c| c == code),
        })
    }
}
