use gqlcache_model::{IdentityResolver, DEFAULT_ID_FIELDS};
use serde_json::{json, Map, Value};

fn obj(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn default_fields_are_typename_then_id() {
    let r = IdentityResolver::default();
    assert_eq!(r.id_fields(), DEFAULT_ID_FIELDS.map(String::from).as_slice());
}

#[test]
fn concatenates_in_configured_order() {
    let r = IdentityResolver::default();
    let key = r.resolve(&obj(json!({"id": "p1", "__typename": "Post", "title": "x"})));
    assert_eq!(key.unwrap().as_str(), "Postp1");
}

#[test]
fn custom_fields() {
    let r = IdentityResolver::new(["id"]);
    assert_eq!(r.resolve(&obj(json!({"id": "a1"}))).unwrap().as_str(), "a1");
}

#[test]
fn numeric_ids_are_rendered() {
    let r = IdentityResolver::new(["__typename", "id"]);
    assert_eq!(r.resolve(&obj(json!({"__typename": "User", "id": 7}))).unwrap().as_str(), "User7");
}

#[test]
fn missing_id_field_means_no_identity() {
    let r = IdentityResolver::default();
    assert!(r.resolve(&obj(json!({"id": "p1"}))).is_none());
}

#[test]
fn null_or_nested_id_means_no_identity() {
    let r = IdentityResolver::new(["id"]);
    assert!(r.resolve(&obj(json!({"id": null}))).is_none());
    assert!(r.resolve(&obj(json!({"id": {"x": 1}}))).is_none());
}

#[test]
fn empty_field_list_never_identifies() {
    let r = IdentityResolver::new(Vec::<String>::new());
    assert!(r.resolve(&obj(json!({"id": "p1"}))).is_none());
}
