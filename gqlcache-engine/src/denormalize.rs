//! Reader: reference trees → result data.
//!
//! Rebuilds result data from a stored reference tree, resolving every
//! reference against the current entity store. Entities are looked up at
//! read time, so later merges show through every tree pointing at them.
//! Selected fields are looked up by storage key and emitted under their
//! response key.

use crate::listeners::Objects;
use crate::signature::storage_key;
use gqlcache_store::EntityStore;
use gqlcache_types::{EntityKey, Field, Node, Variables};
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use tracing::warn;

/// How referenced entities are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadMode {
    /// Only the selected fields, in selection order.
    #[default]
    Standard,
    /// Every field currently stored on each referenced entity, including
    /// fields added by later writes that the selection never asked for.
    /// Selected fields still follow their sub-selection; unselected
    /// references are resolved in full, and a reference back to an entity
    /// already being rendered comes out as `{"__ref": key}`.
    Full,
}

/// Result of a cache hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadResult {
    /// Result data keyed by root response key.
    pub data: Value,
    /// Every entity touched while resolving `data`, keyed by identity.
    pub objects: Objects,
}

pub(crate) struct Reader<'a> {
    entities: &'a EntityStore,
    variables: &'a Variables,
    mode: ReadMode,
    objects: Objects,
    /// Entities currently being rendered, for cycle detection.
    stack: Vec<&'a EntityKey>,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(
        entities: &'a EntityStore,
        variables: &'a Variables,
        mode: ReadMode,
    ) -> Self {
        Self {
            entities,
            variables,
            mode,
            objects: BTreeMap::new(),
            stack: Vec::new(),
        }
    }

    pub(crate) fn into_objects(self) -> Objects {
        self.objects
    }

    /// Renders a node. `fields` is the sub-selection, or `None` when the
    /// node was not selected (full mode, or an unselected stored key).
    pub(crate) fn read_node(&mut self, node: &'a Node, fields: Option<&[Field]>) -> Value {
        match node {
            Node::Scalar(value) => value.clone(),
            Node::List(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.read_node(item, fields))
                    .collect(),
            ),
            Node::Reference(key) => self.read_entity(key, fields),
            Node::Object(record) => self.read_record(record, fields),
        }
    }

    /// Resolves a reference against the current store.
    pub(crate) fn read_entity(&mut self, key: &'a EntityKey, fields: Option<&[Field]>) -> Value {
        let entities = self.entities;
        let Some(entity) = entities.get(key) else {
            warn!(entity = %key, "reference to an entity that is not stored");
            return Value::Null;
        };
        if fields.is_none() && self.stack.contains(&key) {
            return json!({ "__ref": key.as_str() });
        }

        self.objects
            .entry(key.clone())
            .or_insert_with(|| entity.clone());

        self.stack.push(key);
        let value = self.read_record(entity.as_map(), fields);
        self.stack.pop();
        value
    }

    fn read_record(
        &mut self,
        record: &'a BTreeMap<String, Node>,
        fields: Option<&[Field]>,
    ) -> Value {
        let mut out = Map::new();
        match (fields, self.mode) {
            (Some(fields), ReadMode::Standard) => {
                for field in fields {
                    let value = match record.get(&storage_key(field, self.variables)) {
                        Some(node) => self.read_node(node, field.subfields()),
                        None => Value::Null,
                    };
                    out.insert(field.response_key().to_string(), value);
                }
            }
            (Some(fields), ReadMode::Full) => {
                let selected: BTreeMap<String, &Field> = fields
                    .iter()
                    .map(|field| (storage_key(field, self.variables), field))
                    .collect();
                for (name, node) in record {
                    if !selected.contains_key(name) {
                        let value = self.read_node(node, None);
                        out.insert(name.clone(), value);
                    }
                }
                for field in fields {
                    let value = match record.get(&storage_key(field, self.variables)) {
                        Some(node) => self.read_node(node, field.subfields()),
                        None => Value::Null,
                    };
                    out.insert(field.response_key().to_string(), value);
                }
            }
            (None, _) => {
                for (name, node) in record {
                    let value = self.read_node(node, None);
                    out.insert(name.clone(), value);
                }
            }
        }
        Value::Object(out)
    }
}
