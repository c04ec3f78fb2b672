//! Store decorator that fans one logical entry out into per-locale records.
//!
//! `LocaleSplitStore` implements the same capability contract as the store
//! it wraps, multiplying each multi-locale entry into N physical records
//! while presenting a 1:1 key space to any caller that only knows original
//! ids. The id→composite-keys table is metadata over store-owned keys; it is
//! rebuilt from existing keys at construction so hot-reload runs see the
//! fan-out performed by earlier runs.

use crate::keys::collect_keys;
use crate::prune::prune_locales;
use lingo_store::{ContentStore, StoreError, StoreResult};
use lingo_types::{Entry, LOCALE_FIELD};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Marker prefix for asset references planted in parsed data by the host's
/// asset pipeline.
pub const ASSET_IMPORT_PREFIX: &str = "__ASSET_IMPORT_";

/// Builds the composite store key for one locale variant.
pub fn composite_key(id: &str, locale: &str) -> String {
    format!("{id}/{locale}")
}

/// Splits a composite key back into `(original_id, locale)`.
///
/// Returns `None` unless the key's trailing `/`-segment is a configured
/// locale code, so ordinary ids containing slashes pass through untouched.
pub fn split_composite_key<'a>(
    key: &'a str,
    locale_codes: &[String],
) -> Option<(&'a str, &'a str)> {
    let (original, candidate) = key.rsplit_once('/')?;
    locale_codes
        .iter()
        .any(|code| code == candidate)
        .then_some((original, candidate))
}

/// Collects asset references (strings carrying [`ASSET_IMPORT_PREFIX`])
/// anywhere in a document tree, prefix stripped.
pub fn collect_asset_refs(document: &Value) -> Vec<String> {
    let mut assets = Vec::new();
    collect_assets_into(document, &mut assets);
    assets
}

fn collect_assets_into(value: &Value, assets: &mut Vec<String>) {
    match value {
        Value::String(text) => {
            if let Some(asset) = text.strip_prefix(ASSET_IMPORT_PREFIX) {
                assets.push(asset.to_string());
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_assets_into(item, assets);
            }
        }
        Value::Object(map) => {
            for child in map.values() {
                collect_assets_into(child, assets);
            }
        }
        _ => {}
    }
}

/// Store decorator performing locale fan-out, deletion propagation, and
/// key-presentation remapping over an inner store.
pub struct LocaleSplitStore {
    inner: Arc<dyn ContentStore>,
    locale_codes: Vec<String>,
    /// Original id → composite keys written for it, for the current process
    /// lifetime. Seeded from existing store keys at construction.
    fanout: Mutex<HashMap<String, Vec<String>>>,
}

impl LocaleSplitStore {
    /// Wraps `inner`, rebuilding the fan-out table from keys left behind by
    /// previous runs.
    pub fn new(inner: Arc<dyn ContentStore>, locale_codes: Vec<String>) -> Self {
        let mut fanout: HashMap<String, Vec<String>> = HashMap::new();
        for key in inner.keys() {
            if let Some((original, _)) = split_composite_key(&key, &locale_codes) {
                fanout.entry(original.to_string()).or_default().push(key);
            }
        }
        if !fanout.is_empty() {
            debug!(ids = fanout.len(), "rebuilt fan-out table from existing keys");
        }
        Self {
            inner,
            locale_codes,
            fanout: Mutex::new(fanout),
        }
    }

    /// The configured locale codes actually present as keys in `data`,
    /// in configuration order.
    fn active_locales(&self, data: &Value) -> Vec<String> {
        let present = collect_keys(data);
        self.locale_codes
            .iter()
            .filter(|code| present.contains(code.as_str()))
            .cloned()
            .collect()
    }
}

impl ContentStore for LocaleSplitStore {
    fn get(&self, id: &str) -> Option<Entry> {
        // Fanned-out ids never resolve: the base loader must re-parse them
        // instead of treating the original id as cached.
        if self.fanout.lock().unwrap().contains_key(id) {
            return None;
        }
        self.inner.get(id)
    }

    fn set(&self, entry: Entry) -> StoreResult<bool> {
        let active = self.active_locales(&entry.data);
        if active.is_empty() {
            return self.inner.set(entry);
        }
        debug!(id = %entry.id, locales = ?active, "fanning out entry");

        // Prune every projection before the first write so a structure error
        // leaves the inner store untouched.
        let mut projections = Vec::with_capacity(active.len());
        for locale in &active {
            let pruned = prune_locales(&entry.data, &active, locale)
                .map_err(|e| StoreError::InvalidDocument(e.to_string()))?;
            projections.push((locale.clone(), pruned));
        }

        let mut changed = false;
        let mut composite_keys = Vec::with_capacity(projections.len());
        for (locale, pruned) in projections {
            let assets = collect_asset_refs(&pruned);
            let mut data = pruned;
            if let Value::Object(map) = &mut data {
                map.insert(LOCALE_FIELD.to_string(), Value::String(locale.clone()));
            }
            let key = composite_key(&entry.id, &locale);
            let variant = Entry {
                id: key.clone(),
                data,
                ..entry.clone()
            };
            if self.inner.set(variant)? {
                changed = true;
            }
            // Registered on every run: the inner store skips its own asset
            // handling when the digest is unchanged.
            if let (Some(file_path), false) = (&entry.file_path, assets.is_empty()) {
                self.inner.add_asset_imports(&assets, file_path);
            }
            composite_keys.push(key);
        }
        self.fanout.lock().unwrap().insert(entry.id, composite_keys);
        Ok(changed)
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        let recorded = self.fanout.lock().unwrap().remove(id);
        match recorded {
            Some(keys) => {
                debug!(id, variants = keys.len(), "deleting fanned-out entry");
                for key in keys {
                    self.inner.delete(&key)?;
                }
                Ok(())
            }
            None => self.inner.delete(id),
        }
    }

    fn keys(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut folded = Vec::new();
        for key in self.inner.keys() {
            let id = match split_composite_key(&key, &self.locale_codes) {
                Some((original, _)) => original.to_string(),
                None => key,
            };
            if seen.insert(id.clone()) {
                folded.push(id);
            }
        }
        folded
    }

    fn entries(&self) -> Vec<(String, Entry)> {
        self.inner.entries()
    }

    fn clear(&self) {
        self.fanout.lock().unwrap().clear();
        self.inner.clear();
    }

    fn add_asset_imports(&self, assets: &[String], file_path: &str) {
        self.inner.add_asset_imports(assets, file_path);
    }
}
