use crate::{ContentStore, StoreResult};
use lingo_types::Entry;
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

/// In-memory reference store with digest-based change detection.
///
/// Entries without a caller-provided digest get one computed from their
/// serialized data and body, so `set` can report "unchanged" across
/// incremental runs.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, Entry>>,
    asset_imports: Mutex<BTreeMap<String, BTreeSet<String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the asset references registered for a source file.
    pub fn asset_imports_for(&self, file_path: &str) -> Vec<String> {
        self.asset_imports
            .lock()
            .unwrap()
            .get(file_path)
            .map(|assets| assets.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn compute_digest(entry: &Entry) -> String {
        let mut hasher = Sha256::new();
        hasher.update(entry.data.to_string().as_bytes());
        if let Some(body) = &entry.body {
            hasher.update(body.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

impl ContentStore for MemoryStore {
    fn get(&self, id: &str) -> Option<Entry> {
        self.entries.lock().unwrap().get(id).cloned()
    }

    fn set(&self, mut entry: Entry) -> StoreResult<bool> {
        if entry.digest.is_none() {
            entry.digest = Some(Self::compute_digest(&entry));
        }
        let mut entries = self.entries.lock().unwrap();
        if let Some(existing) = entries.get(&entry.id) {
            if existing.digest == entry.digest {
                return Ok(false);
            }
        }
        entries.insert(entry.id.clone(), entry);
        Ok(true)
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        self.entries.lock().unwrap().remove(id);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.lock().unwrap().keys().cloned().collect()
    }

    fn entries(&self) -> Vec<(String, Entry)> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(id, entry)| (id.clone(), entry.clone()))
            .collect()
    }

    fn clear(&self) {
        self.entries.lock().unwrap().clear();
        self.asset_imports.lock().unwrap().clear();
    }

    fn add_asset_imports(&self, assets: &[String], file_path: &str) {
        let mut imports = self.asset_imports.lock().unwrap();
        imports
            .entry(file_path.to_string())
            .or_default()
            .extend(assets.iter().cloned());
    }
}
