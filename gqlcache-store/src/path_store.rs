//! The path store.
//!
//! Maps each root-field signature to the reference tree last written for
//! it. Unlike entities, a tree is replaced wholesale on every write.

use gqlcache_types::{Node, Signature};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Signature → reference tree mapping, one entry per cached root field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathStore {
    paths: HashMap<Signature, Node>,
}

impl PathStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the reference tree stored for a signature.
    pub fn get(&self, signature: &Signature) -> Option<&Node> {
        self.paths.get(signature)
    }

    /// Returns true if a tree is stored for `signature`.
    pub fn contains(&self, signature: &Signature) -> bool {
        self.paths.contains_key(signature)
    }

    /// Stores a reference tree, replacing any previous tree for the same
    /// signature. Returns the replaced tree.
    pub fn insert(&mut self, signature: Signature, tree: Node) -> Option<Node> {
        self.paths.insert(signature, tree)
    }

    /// Returns all stored signatures.
    pub fn signatures(&self) -> impl Iterator<Item = &Signature> {
        self.paths.keys()
    }

    /// Iterates entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Signature, &Node)> {
        self.paths.iter()
    }

    /// Number of cached root fields.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if no root field is cached.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
