//! Cache configuration.

use gqlcache_model::DEFAULT_ID_FIELDS;
use gqlcache_store::Snapshot;
use serde::Deserialize;

/// Options recognized at cache construction.
///
/// Deserializes from the `{ "idFields": [...], "initialState": {...} }`
/// shape that hosts pass across a JS/FFI boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CacheConfig {
    /// Ordered field names whose values make up an entity's identity.
    pub id_fields: Vec<String>,
    /// A prior flush to hydrate from.
    pub initial_state: Option<Snapshot>,
}

impl CacheConfig {
    /// Replaces the id fields.
    #[must_use]
    pub fn with_id_fields<I, S>(mut self, id_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.id_fields = id_fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the snapshot to hydrate from.
    #[must_use]
    pub fn with_initial_state(mut self, snapshot: Snapshot) -> Self {
        self.initial_state = Some(snapshot);
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            id_fields: DEFAULT_ID_FIELDS.iter().map(|f| f.to_string()).collect(),
            initial_state: None,
        }
    }
}
