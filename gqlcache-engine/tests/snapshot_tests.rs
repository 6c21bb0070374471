mod common;

use common::*;
use gqlcache_engine::{Cache, CacheConfig, CacheError};
use gqlcache_store::Snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Flush & hydrate ──────────────────────────────────────────────

#[test]
fn hydrated_cache_reads_like_the_original() {
    let mut original = Cache::default();
    original.write(&authors_request(), &authors_data()).unwrap();
    original.write(&post_request("p1"), &post_data("p1", "A")).unwrap();

    let hydrated =
        Cache::new(CacheConfig::default().with_initial_state(original.flush())).unwrap();

    for request in [authors_request(), post_request("p1")] {
        assert_eq!(hydrated.read(&request), original.read(&request));
    }
    assert_eq!(hydrated.read(&authors_request()).unwrap().data, authors_data());
}

#[test]
fn hydration_through_json() {
    let mut original = Cache::default();
    original.write(&posts_request(), &posts_data()).unwrap();
    let json = original.flush().to_json().unwrap();

    let hydrated = Cache::from_snapshot_json(&json, CacheConfig::default()).unwrap();
    assert_eq!(hydrated.read(&posts_request()).unwrap().data, posts_data());
}

#[test]
fn flush_is_a_deep_copy() {
    let mut cache = Cache::default();
    cache.write(&post_request("p1"), &post_data("p1", "A")).unwrap();
    let snapshot = cache.flush();

    cache.write(&post_request("p1"), &post_data("p1", "B")).unwrap();
    let hydrated = Cache::new(CacheConfig::default().with_initial_state(snapshot)).unwrap();
    assert_eq!(hydrated.read(&post_request("p1")).unwrap().data["post"]["title"], json!("A"));
}

#[test]
fn hydrated_cache_keeps_accepting_writes() {
    let mut original = Cache::default();
    original.write(&posts_request(), &posts_data()).unwrap();
    let mut hydrated =
        Cache::new(CacheConfig::default().with_initial_state(original.flush())).unwrap();

    hydrated.write(&post_request("p2"), &post_data("p2", "Changed")).unwrap();
    assert_eq!(
        hydrated.read(&posts_request()).unwrap().data["posts"][1]["title"],
        json!("Changed")
    );
}

#[test]
fn malformed_snapshot_json_is_an_error() {
    let err = Cache::from_snapshot_json("{", CacheConfig::default()).unwrap_err();
    assert!(matches!(err, CacheError::Store(_)));
}

// ── Configuration ────────────────────────────────────────────────

#[test]
fn default_id_fields() {
    assert_eq!(Cache::default().id_fields(), ["__typename", "id"]);
}

#[test]
fn default_cache_matches_default_config() {
    let default = Cache::default();
    let configured = Cache::new(CacheConfig::default()).unwrap();
    assert_eq!(default.id_fields(), configured.id_fields());
    assert_eq!(default.flush(), configured.flush());
    assert!(default.flush().objects_map.is_empty());
}

#[test]
fn custom_id_fields_shape_keys() {
    let mut cache = Cache::new(CacheConfig::default().with_id_fields(["__typename", "id"])).unwrap();
    cache.write(&authors_request(), &authors_data()).unwrap();
    assert!(
        cache
            .flush()
            .objects_map
            .keys()
            .all(|k| k.as_str().starts_with("Post") || k.as_str().starts_with("Author"))
    );

    let mut by_id = Cache::new(CacheConfig::default().with_id_fields(["id"])).unwrap();
    by_id.write(&authors_request(), &authors_data()).unwrap();
    let mut keys: Vec<_> = by_id.entities().keys().map(|k| k.to_string()).collect();
    keys.sort();
    assert_eq!(keys, vec!["a1", "a2", "p1", "p2", "p3"]);
}

#[test]
fn empty_id_fields_are_rejected() {
    let err = Cache::new(CacheConfig::default().with_id_fields(Vec::<String>::new())).unwrap_err();
    assert!(matches!(err, CacheError::InvalidConfig(_)));
}

#[test]
fn config_deserializes_from_host_options() {
    let mut original = Cache::default();
    original.write(&posts_request(), &posts_data()).unwrap();
    let options = json!({
        "idFields": ["__typename", "id"],
        "initialState": serde_json::to_value(original.flush()).unwrap(),
    });

    let config: CacheConfig = serde_json::from_value(options).unwrap();
    let cache = Cache::new(config).unwrap();
    assert_eq!(cache.read(&posts_request()), original.read(&posts_request()));
}

#[test]
fn config_fields_default_when_omitted() {
    let config: CacheConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(config.id_fields, vec!["__typename", "id"]);
    assert!(config.initial_state.is_none());
}

#[test]
fn snapshot_with_dangling_reference_still_hydrates() {
    let mut snapshot = Snapshot::default();
    snapshot.paths_map.insert("ghost{id}".into(), gqlcache_types::Node::Reference("gone".into()));
    let cache = Cache::new(CacheConfig::default().with_initial_state(snapshot)).unwrap();
    let request = gqlcache_types::Request::new(vec![gqlcache_types::Field::object(
        "ghost",
        vec![gqlcache_types::Field::leaf("id")],
    )]);
    assert_eq!(cache.read(&request).unwrap().data, json!({"ghost": null}));
}
