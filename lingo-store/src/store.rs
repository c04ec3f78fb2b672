use crate::StoreResult;
use lingo_types::Entry;

/// Key-value store for parsed content entries, durable across incremental runs.
///
/// All receivers are `&self`; implementations use interior mutability so the
/// store can be shared behind an `Arc` across a load cycle. The host
/// guarantees non-overlapping load invocations, so no operation needs to
/// coordinate beyond its own internal locking.
pub trait ContentStore: Send + Sync {
    /// Returns the entry stored under `id`, if any.
    fn get(&self, id: &str) -> Option<Entry>;

    /// Commits an entry under its id.
    ///
    /// Returns whether the entry's digest changed since the last run; hosts
    /// use this for incremental rebuild decisions.
    fn set(&self, entry: Entry) -> StoreResult<bool>;

    /// Removes the entry stored under `id`. Removing a missing id is a no-op.
    fn delete(&self, id: &str) -> StoreResult<()>;

    /// Returns all store keys.
    fn keys(&self) -> Vec<String>;

    /// Returns all `(id, entry)` pairs.
    fn entries(&self) -> Vec<(String, Entry)>;

    /// Removes every entry.
    fn clear(&self);

    /// Registers asset references found in an entry's data against its
    /// source file, for downstream asset pipelines.
    ///
    /// Backends without an asset pipeline can keep the default no-op.
    fn add_asset_imports(&self, assets: &[String], file_path: &str) {
        let _ = (assets, file_path);
    }
}
