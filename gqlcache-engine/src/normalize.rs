//! Normalizer: response data → reference trees + merged entities.
//!
//! Walks response data in lock-step with its selection. Every object with a
//! complete identity is merged into the entity store and replaced by a
//! reference; objects without one stay inline. Selected fields are stored
//! under their storage key (name plus resolved arguments); keys present in
//! the data but not selected are stored as-is, so full-mode reads can
//! surface them.

use crate::signature::storage_key;
use gqlcache_model::{Entity, IdentityResolver};
use gqlcache_store::EntityStore;
use gqlcache_types::{EntityKey, Field, Node, Selection, Variables};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{trace, warn};

/// Normalizes the root fields of one write.
pub(crate) struct Normalizer<'a> {
    resolver: &'a IdentityResolver,
    entities: &'a mut EntityStore,
    variables: &'a Variables,
    /// Entities created or changed by this write.
    changed: BTreeSet<EntityKey>,
    merges: usize,
}

impl<'a> Normalizer<'a> {
    pub(crate) fn new(
        resolver: &'a IdentityResolver,
        entities: &'a mut EntityStore,
        variables: &'a Variables,
    ) -> Self {
        Self {
            resolver,
            entities,
            variables,
            changed: BTreeSet::new(),
            merges: 0,
        }
    }

    /// Normalizes one root field's value into its reference tree.
    pub(crate) fn normalize_root(&mut self, field: &Field, value: &Value) -> Node {
        self.normalize_value(value, Some(&field.selection))
    }

    /// Number of entity merges performed, including no-op merges.
    pub(crate) fn merges(&self) -> usize {
        self.merges
    }

    /// Finishes the write, returning the keys of created or changed entities.
    pub(crate) fn finish(self) -> BTreeSet<EntityKey> {
        self.changed
    }

    fn normalize_value(&mut self, value: &Value, selection: Option<&Selection>) -> Node {
        match value {
            Value::Array(items) => Node::List(
                items
                    .iter()
                    .map(|item| self.normalize_value(item, selection))
                    .collect(),
            ),
            Value::Object(object) => match selection {
                // A scalar selection holding an object is a JSON scalar.
                Some(Selection::Leaf) => Node::Scalar(value.clone()),
                Some(Selection::Object(fields)) => {
                    self.normalize_object(object, Some(fields.as_slice()))
                }
                None => self.normalize_object(object, None),
            },
            Value::Null => Node::null(),
            scalar => {
                if matches!(selection, Some(Selection::Object(_))) {
                    warn!(value = %scalar, "object selection holds a scalar, storing inline");
                }
                Node::Scalar(scalar.clone())
            }
        }
    }

    fn normalize_object(&mut self, object: &Map<String, Value>, fields: Option<&[Field]>) -> Node {
        let record: BTreeMap<String, Node> = object
            .iter()
            .map(|(key, value)| {
                let field =
                    fields.and_then(|fields| fields.iter().find(|f| f.response_key() == key));
                let stored_as = match field {
                    Some(field) => storage_key(field, self.variables),
                    None => key.clone(),
                };
                (stored_as, self.normalize_value(value, field.map(|f| &f.selection)))
            })
            .collect();

        match self.resolver.resolve(object) {
            Some(key) => {
                let entity: Entity = record.into_iter().collect();
                self.merges += 1;
                if self.entities.merge(key.clone(), entity) {
                    trace!(entity = %key, "entity created or changed");
                    self.changed.insert(key.clone());
                }
                Node::Reference(key)
            }
            None => Node::Object(record),
        }
    }
}
