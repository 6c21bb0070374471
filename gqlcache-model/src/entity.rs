//! Normalized entity records.
//!
//! An [`Entity`] maps storage keys to [`Node`]s. Typed getters cover the
//! common scalar and reference lookups.

use gqlcache_types::{EntityKey, Node};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A normalized object stored in the entity store.
///
/// Fields hold scalars, references to other entities, lists of either, or
/// inline objects that had no complete identity. Nested entities never
/// appear as literals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity {
    fields: BTreeMap<String, Node>,
}

impl Entity {
    /// Creates an entity with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a field by storage key (name plus arguments).
    pub fn get(&self, field: &str) -> Option<&Node> {
        self.fields.get(field)
    }

    /// Sets a field, returning the previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: Node) -> Option<Node> {
        self.fields.insert(field.into(), value)
    }

    /// Returns true if the field is present (even when `null`).
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterates fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Node)> {
        self.fields.iter()
    }

    /// Number of stored fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the entity has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Extract a scalar field value.
    pub fn get_scalar(&self, field: &str) -> Option<&Value> {
        match self.fields.get(field) {
            Some(Node::Scalar(value)) => Some(value),
            _ => None,
        }
    }

    /// Extract a string field value.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get_scalar(field).and_then(|v| v.as_str())
    }

    /// Extract a boolean field value.
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get_scalar(field).and_then(|v| v.as_bool())
    }

    /// Extract a numeric field value.
    pub fn get_number(&self, field: &str) -> Option<f64> {
        self.get_scalar(field).and_then(|v| v.as_f64())
    }

    /// Extract the key of a reference field.
    pub fn get_reference(&self, field: &str) -> Option<&EntityKey> {
        self.fields.get(field).and_then(Node::as_reference)
    }

    /// Borrows the underlying field map.
    pub fn as_map(&self) -> &BTreeMap<String, Node> {
        &self.fields
    }

    pub(crate) fn fields_mut(&mut self) -> &mut BTreeMap<String, Node> {
        &mut self.fields
    }
}

impl FromIterator<(String, Node)> for Entity {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Entity {
    type Item = (String, Node);
    type IntoIter = std::collections::btree_map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
