//! Reference trees.
//!
//! A [`Node`] is response data after normalization: every identifiable
//! object has been replaced by a [`Node::Reference`] carrying only its
//! [`EntityKey`]. References are resolved against the entity store at read
//! time, so an update to a shared entity shows up through every tree that
//! points at it.

use crate::ids::EntityKey;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A normalized value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Node {
    /// A leaf value copied as-is (including `null` and JSON scalars).
    Scalar(Value),
    /// A pointer to an entity in the entity store.
    Reference(EntityKey),
    /// An object without a complete identity, kept inline.
    Object(BTreeMap<String, Node>),
    /// A list, order preserved.
    List(Vec<Node>),
}

impl Node {
    /// The `null` scalar.
    #[must_use]
    pub const fn null() -> Self {
        Self::Scalar(Value::Null)
    }

    /// Returns the referenced key if this node is a reference.
    #[must_use]
    pub fn as_reference(&self) -> Option<&EntityKey> {
        match self {
            Self::Reference(key) => Some(key),
            _ => None,
        }
    }

    /// Collects every entity key reachable from this node, without
    /// following references into the store.
    pub fn collect_references<'a>(&'a self, out: &mut Vec<&'a EntityKey>) {
        match self {
            Self::Scalar(_) => {}
            Self::Reference(key) => out.push(key),
            Self::Object(fields) => fields.values().for_each(|n| n.collect_references(out)),
            Self::List(items) => items.iter().for_each(|n| n.collect_references(out)),
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Self::Scalar(value)
    }
}
