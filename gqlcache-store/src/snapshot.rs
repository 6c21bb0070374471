//! Serializable copies of the cache stores.

use crate::{EntityStore, PathStore, StoreResult};
use gqlcache_types::EntityKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A deep copy of both stores, as produced by flushing a cache.
///
/// Installed verbatim when a cache is built from it; no reconciliation is
/// attempted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub objects_map: EntityStore,
    #[serde(default)]
    pub paths_map: PathStore,
}

impl Snapshot {
    pub fn new(objects_map: EntityStore, paths_map: PathStore) -> Self {
        Self {
            objects_map,
            paths_map,
        }
    }

    /// Serializes the snapshot to compact JSON.
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the snapshot to indented JSON.
    pub fn to_json_pretty(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a snapshot previously produced by [`Snapshot::to_json`].
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns every referenced key, from path trees or entity fields, that
    /// has no entry in the entity store. A snapshot produced by a cache has
    /// none; hand-built or truncated ones may.
    pub fn dangling_references(&self) -> BTreeSet<EntityKey> {
        let mut refs = Vec::new();
        for (_, tree) in self.paths_map.iter() {
            tree.collect_references(&mut refs);
        }
        for (_, entity) in self.objects_map.iter() {
            for (_, node) in entity.fields() {
                node.collect_references(&mut refs);
            }
        }
        refs.into_iter()
            .filter(|key| !self.objects_map.contains(key))
            .cloned()
            .collect()
    }
}
