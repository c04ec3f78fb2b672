use lingo_loader::{collect_keys, prune_locales};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn locales() -> Vec<String> {
    vec!["de-CH".to_string(), "zh-CN".to_string()]
}

fn to_object(entries: impl IntoIterator<Item = (String, Value)>) -> Value {
    Value::Object(entries.into_iter().collect::<Map<String, Value>>())
}

/// Documents containing no locale key anywhere.
fn plain_document() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| Value::Number(n.into())),
        "[a-z]{0,6}".prop_map(Value::String),
    ];
    let node = leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::btree_map("[a-m]{1,4}", inner, 0..4).prop_map(to_object),
        ]
    });
    proptest::collection::btree_map("[a-m]{1,4}", node, 1..4).prop_map(to_object)
}

/// Documents whose leaves may be locale-bearing subtrees.
fn localized_document() -> impl Strategy<Value = Value> {
    let locale_map = proptest::collection::btree_map(
        prop_oneof![Just("de-CH".to_string()), Just("zh-CN".to_string())],
        "[a-z]{1,6}".prop_map(Value::String),
        1..3,
    )
    .prop_map(to_object);
    let leaf = prop_oneof![
        "[a-z]{0,6}".prop_map(Value::String),
        locale_map,
    ];
    let node = leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::btree_map("[a-m]{1,4}", inner, 0..4).prop_map(to_object),
        ]
    });
    proptest::collection::btree_map("[a-m]{1,4}", node, 1..4).prop_map(to_object)
}

proptest! {
    #[test]
    fn pruning_is_identity_on_locale_free_documents(doc in plain_document()) {
        let pruned = prune_locales(&doc, &locales(), "de-CH").unwrap();
        prop_assert_eq!(pruned, doc);
    }

    #[test]
    fn pruning_is_idempotent(doc in localized_document()) {
        let once = prune_locales(&doc, &locales(), "zh-CN").unwrap();
        let twice = prune_locales(&once, &locales(), "zh-CN").unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn key_extraction_sees_every_locale_the_pruner_collapses(doc in localized_document()) {
        let keys = collect_keys(&doc);
        let pruned = prune_locales(&doc, &locales(), "de-CH").unwrap();
        // Nothing new appears after pruning.
        for key in collect_keys(&pruned) {
            prop_assert!(keys.contains(&key));
        }
    }
}
