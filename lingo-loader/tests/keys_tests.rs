use lingo_loader::collect_keys;
use serde_json::json;

fn keys(value: serde_json::Value) -> Vec<String> {
    collect_keys(&value).into_iter().collect()
}

#[test]
fn collects_top_level_keys() {
    assert_eq!(keys(json!({"a": 1, "b": "x"})), vec!["a", "b"]);
}

#[test]
fn collects_nested_mapping_keys() {
    assert_eq!(
        keys(json!({"title": {"de-CH": "T", "zh-CN": "T"}})),
        vec!["de-CH", "title", "zh-CN"]
    );
}

#[test]
fn collects_keys_inside_sequences() {
    assert_eq!(
        keys(json!({"images": [{"src": "a.jpg"}, {"alt": "x"}]})),
        vec!["alt", "images", "src"]
    );
}

#[test]
fn sequence_indices_are_not_keys() {
    assert_eq!(keys(json!({"nums": [1, 2, 3]})), vec!["nums"]);
}

#[test]
fn unwraps_sequences_of_sequences() {
    // Fully recursive through nested arrays, unlike the pruning engine.
    assert_eq!(keys(json!({"a": [[{"b": 1}]]})), vec!["a", "b"]);
}

#[test]
fn scalars_and_empty_documents_yield_nothing() {
    assert!(keys(json!("text")).is_empty());
    assert!(keys(json!(null)).is_empty());
    assert!(keys(json!({})).is_empty());
}
