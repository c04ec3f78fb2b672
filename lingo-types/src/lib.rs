//! Core type definitions for Lingo.
//!
//! This crate defines the fundamental, loader-agnostic types used throughout
//! the content pipeline:
//! - Content entries (id + document body + source origin)
//! - Locale configuration (locale codes, groups, default locale)
//! - Identity and path derivation for translated sources
//!
//! Loader orchestration and store implementations belong in `lingo-loader`
//! and `lingo-store`, not here.

mod entry;
mod locale;
mod path;

pub use entry::{
    Entry, BASE_PATH_FIELD, CONTENT_PATH_FIELD, LOCALE_FIELD, TRANSLATION_ID_FIELD,
};
pub use locale::{I18nConfig, LocaleSpec, UNDETERMINED_LOCALE};
pub use path::{create_content_path, create_translation_id, parse_locale, resolve_path};
