//! Locale-pruning engine.

use crate::InvalidStructureError;
use serde_json::{Map, Value};

/// Produces the locale-specific projection of a document.
///
/// Any mapping whose full, non-empty key set is drawn from `active_locales`
/// (a locale-bearing subtree) collapses to its value at `target_locale`, or
/// is omitted when that locale has no entry. All other structure is
/// preserved by recursion. The input is never mutated.
///
/// Sequence elements that are mappings are pruned; elements that are
/// themselves sequences pass through as-is. `collect_keys` by contrast
/// unwraps nested sequences fully, so a locale map buried inside nested
/// sequences counts toward the active locale set but is never collapsed.
///
/// # Errors
///
/// [`InvalidStructureError`] if any top-level key of `document` is itself a
/// locale code: a document must have locale-bearing fields, it cannot be a
/// bare locale map.
pub fn prune_locales(
    document: &Value,
    active_locales: &[String],
    target_locale: &str,
) -> Result<Value, InvalidStructureError> {
    let Value::Object(map) = document else {
        return Ok(document.clone());
    };
    let colliding: Vec<String> = map
        .keys()
        .filter(|key| active_locales.iter().any(|locale| locale == *key))
        .cloned()
        .collect();
    if !colliding.is_empty() {
        return Err(InvalidStructureError { keys: colliding });
    }
    if map.is_empty() {
        return Ok(document.clone());
    }
    Ok(Value::Object(prune_map(map, active_locales, target_locale)))
}

fn prune_map(
    map: &Map<String, Value>,
    active_locales: &[String],
    target_locale: &str,
) -> Map<String, Value> {
    let mut result = Map::new();
    for (key, value) in map {
        match value {
            Value::Array(items) => {
                let pruned = items
                    .iter()
                    .map(|item| match item {
                        Value::Object(inner) => {
                            Value::Object(prune_map(inner, active_locales, target_locale))
                        }
                        other => other.clone(),
                    })
                    .collect();
                result.insert(key.clone(), Value::Array(pruned));
            }
            Value::Object(inner) => {
                if is_locale_map(inner, active_locales) {
                    if let Some(selected) = inner.get(target_locale) {
                        result.insert(key.clone(), selected.clone());
                    }
                } else {
                    result.insert(
                        key.clone(),
                        Value::Object(prune_map(inner, active_locales, target_locale)),
                    );
                }
            }
            scalar => {
                result.insert(key.clone(), scalar.clone());
            }
        }
    }
    result
}

fn is_locale_map(map: &Map<String, Value>, active_locales: &[String]) -> bool {
    !map.is_empty()
        && map
            .keys()
            .all(|key| active_locales.iter().any(|locale| locale == key))
}
