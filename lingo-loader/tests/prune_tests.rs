use lingo_loader::prune_locales;
use pretty_assertions::assert_eq;
use serde_json::json;

fn locales() -> Vec<String> {
    vec!["de-CH".to_string(), "zh-CN".to_string()]
}

// ── locale-bearing subtrees ──────────────────────────────────────

#[test]
fn collapses_locale_map_to_target_scalar() {
    let doc = json!({"title": {"de-CH": "Weltraum", "zh-CN": "太空"}});
    let pruned = prune_locales(&doc, &locales(), "de-CH").unwrap();
    assert_eq!(pruned, json!({"title": "Weltraum"}));
}

#[test]
fn omits_field_when_target_locale_is_absent() {
    let doc = json!({"title": {"de-CH": "Weltraum"}, "cover": "x.jpg"});
    let pruned = prune_locales(&doc, &locales(), "zh-CN").unwrap();
    assert_eq!(pruned, json!({"cover": "x.jpg"}));
}

#[test]
fn collapses_locale_map_holding_subdocuments() {
    let doc = json!({"hero": {"de-CH": {"label": "Los"}, "zh-CN": {"label": "走"}}});
    let pruned = prune_locales(&doc, &locales(), "zh-CN").unwrap();
    assert_eq!(pruned, json!({"hero": {"label": "走"}}));
}

#[test]
fn prunes_mappings_inside_sequences() {
    let doc = json!({
        "images": [{"src": "a.jpg", "title": {"de-CH": "T1", "zh-CN": "T2"}}]
    });
    let pruned = prune_locales(&doc, &locales(), "de-CH").unwrap();
    assert_eq!(pruned, json!({"images": [{"src": "a.jpg", "title": "T1"}]}));
}

#[test]
fn nested_sequences_pass_through_unpruned() {
    // Only one level of array unwrapping is pruning-aware; key extraction
    // disagrees, and that asymmetry is preserved deliberately.
    let doc = json!({"grid": [[{"title": {"de-CH": "T"}}]]});
    let pruned = prune_locales(&doc, &locales(), "de-CH").unwrap();
    assert_eq!(pruned, json!({"grid": [[{"title": {"de-CH": "T"}}]]}));
}

#[test]
fn mixed_key_mappings_are_recursed_not_collapsed() {
    let doc = json!({"section": {"heading": {"de-CH": "H", "zh-CN": "H"}, "order": 1}});
    let pruned = prune_locales(&doc, &locales(), "de-CH").unwrap();
    assert_eq!(pruned, json!({"section": {"heading": "H", "order": 1}}));
}

// ── preconditions and pass-throughs ──────────────────────────────

#[test]
fn rejects_bare_locale_map_at_root() {
    let doc = json!({"de-CH": "x", "zh-CN": "y"});
    let err = prune_locales(&doc, &locales(), "de-CH").unwrap_err();
    assert!(err.to_string().contains("de-CH"));
}

#[test]
fn rejects_partial_locale_collision_at_root() {
    let doc = json!({"de-CH": "x", "title": "y"});
    assert!(prune_locales(&doc, &locales(), "zh-CN").is_err());
}

#[test]
fn empty_document_is_returned_unchanged() {
    let doc = json!({});
    assert_eq!(prune_locales(&doc, &locales(), "de-CH").unwrap(), json!({}));
}

#[test]
fn scalars_and_plain_structure_are_copied() {
    let doc = json!({"title": "Omni", "count": 5, "tags": ["a", "b"], "ok": true});
    let pruned = prune_locales(&doc, &locales(), "de-CH").unwrap();
    assert_eq!(pruned, doc);
}

#[test]
fn input_is_not_mutated() {
    let doc = json!({"title": {"de-CH": "T", "zh-CN": "T2"}});
    let before = doc.clone();
    let _ = prune_locales(&doc, &locales(), "de-CH").unwrap();
    assert_eq!(doc, before);
}

#[test]
fn pruning_is_idempotent() {
    let doc = json!({
        "title": {"de-CH": "Weltraum", "zh-CN": "太空"},
        "images": [{"src": "a.jpg", "title": {"de-CH": "T1", "zh-CN": "T2"}}]
    });
    let once = prune_locales(&doc, &locales(), "de-CH").unwrap();
    let twice = prune_locales(&once, &locales(), "de-CH").unwrap();
    assert_eq!(twice, once);
}
