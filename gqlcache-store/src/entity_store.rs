//! The entity store.
//!
//! One normalized record per identity. Records only grow: a merge adds or
//! overwrites fields and never removes one.

use gqlcache_model::Entity;
use gqlcache_types::EntityKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identity → entity mapping.
///
/// Holds exactly one record per identity. Writes go through [`merge`], which
/// applies the additive merge, so a partial update never drops fields.
///
/// [`merge`]: EntityStore::merge
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityStore {
    entities: HashMap<EntityKey, Entity>,
}

impl EntityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets an entity by key.
    pub fn get(&self, key: &EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    /// Returns true if an entity is stored under `key`.
    pub fn contains(&self, key: &EntityKey) -> bool {
        self.entities.contains_key(key)
    }

    /// Merges `incoming` into the entity stored under `key`, creating it if
    /// needed. Returns true if the stored record was created or changed.
    pub fn merge(&mut self, key: EntityKey, incoming: Entity) -> bool {
        match self.entities.get_mut(&key) {
            Some(existing) => existing.absorb(incoming),
            None => {
                self.entities.insert(key, incoming);
                true
            }
        }
    }

    /// Returns all stored keys.
    pub fn keys(&self) -> impl Iterator<Item = &EntityKey> {
        self.entities.keys()
    }

    /// Iterates entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&EntityKey, &Entity)> {
        self.entities.iter()
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if no entity is stored.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
