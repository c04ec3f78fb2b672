//! Identity and path derivation for translated content sources.
//!
//! Translated sources encode their locale either as a directory segment
//! (`pages/de-CH/about.mdx`) or as a dot-separated filename part
//! (`pages/about.de-CH.mdx`). Both forms derive the same translation id,
//! which is what links the locale variants of one conceptual document.

/// Derives the locale of a content file from its path.
///
/// Directory segments are checked first, then dot-separated filename parts.
/// Falls back to `default_locale` when no configured code appears.
pub fn parse_locale(file_path: &str, codes: &[String], default_locale: &str) -> String {
    for segment in segments(file_path) {
        if codes.iter().any(|code| code == segment) {
            return segment.to_string();
        }
    }
    if let Some(name) = segments(file_path).last() {
        for part in name.split('.') {
            if codes.iter().any(|code| code == part) {
                return part.to_string();
            }
        }
    }
    default_locale.to_string()
}

/// Derives the stable identity linking all locale variants of one source.
///
/// The file extension is dropped, and when the locale is known its marker
/// (directory segment or filename suffix) is removed, so
/// `pages/about.de-CH.mdx` and `pages/de-CH/about.mdx` both yield
/// `pages/about`.
pub fn create_translation_id(file_path: &str, locale: Option<&str>) -> String {
    let mut parts = owned_segments(file_path);
    strip_extension_in_place(&mut parts);
    if let Some(locale) = locale {
        strip_locale_in_place(&mut parts, locale);
    }
    parts.join("/")
}

/// Derives the locale-independent URL path for a content file.
///
/// The base directory prefix, locale marker, and extension are removed, and
/// a trailing `index` segment collapses to its parent.
pub fn create_content_path(file_path: &str, base: Option<&str>, locale: Option<&str>) -> String {
    let mut parts = owned_segments(file_path);
    if let Some(base) = base {
        let prefix = owned_segments(base);
        if parts.len() >= prefix.len() && parts[..prefix.len()] == prefix[..] {
            parts.drain(..prefix.len());
        }
    }
    strip_extension_in_place(&mut parts);
    if let Some(locale) = locale {
        strip_locale_in_place(&mut parts, locale);
    }
    if parts.last().map(String::as_str) == Some("index") {
        parts.pop();
    }
    resolve_path(parts.iter().map(String::as_str))
}

/// Joins path segments into a URL path with exactly one leading slash.
///
/// Empty segments and `.` markers are skipped; segments containing slashes
/// are split transparently.
pub fn resolve_path<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let joined: Vec<&str> = parts
        .into_iter()
        .flat_map(|part| part.split('/'))
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();
    format!("/{}", joined.join("/"))
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
}

fn owned_segments(path: &str) -> Vec<String> {
    segments(path).map(str::to_string).collect()
}

fn strip_extension_in_place(parts: &mut [String]) {
    if let Some(last) = parts.last_mut() {
        if let Some((stem, _)) = last.rsplit_once('.') {
            if !stem.is_empty() {
                *last = stem.to_string();
            }
        }
    }
}

fn strip_locale_in_place(parts: &mut Vec<String>, locale: &str) {
    parts.retain(|segment| segment != locale);
    if let Some(last) = parts.last_mut() {
        if let Some(stem) = last.strip_suffix(&format!(".{locale}")) {
            *last = stem.to_string();
        }
    }
}
