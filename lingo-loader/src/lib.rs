//! Locale-splitting content loaders for Lingo.
//!
//! Wraps a generic content loader (anything implementing [`Loader`]) with
//! locale awareness: every parsed entry is tagged with locale, translation
//! id, content path, and base path, and documents embedding locale-keyed
//! subtrees are fanned out into one store record per locale — without
//! disturbing the base loader's incremental-reconciliation logic.
//!
//! # Architecture
//!
//! - `collect_keys` / `prune_locales` — the two recursive document engines
//! - `LocaleSplitStore` — store decorator performing fan-out, deletion
//!   propagation, and key-presentation remapping
//! - `SplitLocaleLoader` / `PathLocaleLoader` — loader wrappers composing
//!   the above around any base loader

mod context;
mod error;
mod keys;
mod loaders;
mod prune;
mod split;

pub use context::{EntryParser, IdentityParser, LoaderContext, ParseProps, SiteConfig};
pub use error::{InvalidStructureError, LoaderError, LoaderResult};
pub use keys::collect_keys;
pub use loaders::{Loader, PathLocaleLoader, SplitLocaleLoader};
pub use prune::prune_locales;
pub use split::{
    collect_asset_refs, composite_key, split_composite_key, LocaleSplitStore,
    ASSET_IMPORT_PREFIX,
};
