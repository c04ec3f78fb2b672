//! Key-extraction engine.

use serde_json::Value;
use std::collections::BTreeSet;

/// Collects every property name appearing anywhere in a document tree.
///
/// Recurses through mappings and sequences; sequences of sequences are
/// unwrapped transparently and indices never contribute keys. Pure and
/// terminating on any finite tree.
///
/// The orchestrator intersects this set with the configured locale codes to
/// obtain an entry's active locale set.
pub fn collect_keys(document: &Value) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    collect_into(document, &mut keys);
    keys
}

fn collect_into(value: &Value, keys: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                keys.insert(key.clone());
                collect_into(child, keys);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_into(item, keys);
            }
        }
        _ => {}
    }
}
