use gqlcache_model::Entity;
use gqlcache_store::EntityStore;
use gqlcache_types::{EntityKey, Node};
use pretty_assertions::assert_eq;
use serde_json::json;

fn make_entity(pairs: Vec<(&str, serde_json::Value)>) -> Entity {
    pairs.into_iter().map(|(k, v)| (k.to_string(), Node::from(v))).collect()
}

// ── Basic operations ─────────────────────────────────────────────

#[test]
fn new_store_is_empty() {
    let store = EntityStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.get(&EntityKey::from("p1")).is_none());
}

#[test]
fn merge_creates_missing_entity() {
    let mut store = EntityStore::new();
    let key = EntityKey::from("p1");
    assert!(store.merge(key.clone(), make_entity(vec![("title", json!("A"))])));
    assert!(store.contains(&key));
    assert_eq!(store.get(&key).unwrap().get_str("title"), Some("A"));
}

#[test]
fn merge_preserves_omitted_fields() {
    let mut store = EntityStore::new();
    let key = EntityKey::from("p1");
    store.merge(key.clone(), make_entity(vec![("title", json!("A")), ("body", json!("b"))]));
    store.merge(key.clone(), make_entity(vec![("title", json!("B"))]));

    let stored = store.get(&key).unwrap();
    assert_eq!(stored.get_str("title"), Some("B"));
    assert_eq!(stored.get_str("body"), Some("b"));
    assert_eq!(store.len(), 1);
}

#[test]
fn merge_reports_unchanged() {
    let mut store = EntityStore::new();
    let key = EntityKey::from("p1");
    store.merge(key.clone(), make_entity(vec![("title", json!("A"))]));
    assert!(!store.merge(key, make_entity(vec![("title", json!("A"))])));
}

#[test]
fn keys_lists_every_identity() {
    let mut store = EntityStore::new();
    store.merge("a".into(), Entity::new());
    store.merge("b".into(), Entity::new());
    let mut keys: Vec<_> = store.keys().map(|k| k.as_str().to_string()).collect();
    keys.sort();
    assert_eq!(keys, vec!["a", "b"]);
}
