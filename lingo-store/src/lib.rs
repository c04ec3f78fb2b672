//! Content store layer for Lingo.
//!
//! Defines the key-value capability contract that loaders mutate during a
//! build cycle, plus an in-memory reference implementation with digest-based
//! change detection. Durable backends implement the same trait; the loader
//! layer never assumes anything beyond it.

mod error;
mod memory;
mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use store::ContentStore;
