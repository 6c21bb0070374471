//! The cache facade.
//!
//! `write` drives normalization, merge, path-store update and listener
//! fan-out. `read` recomputes signatures, looks them up and denormalizes.
//! All operations are synchronous and run to completion; there is no
//! internal scheduling.

use crate::config::CacheConfig;
use crate::denormalize::{ReadMode, ReadResult, Reader};
use crate::error::{CacheError, CacheResult};
use crate::listeners::{ListenerRegistry, Objects, Unlisten};
use crate::normalize::Normalizer;
use crate::signature::{build_signature, request_signatures};
use gqlcache_model::{Entity, IdentityResolver};
use gqlcache_store::{EntityStore, PathStore, Snapshot};
use gqlcache_types::{EntityKey, Request, Variables};
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

/// A normalized GraphQL result cache.
#[derive(Debug)]
pub struct Cache {
    resolver: IdentityResolver,
    entities: EntityStore,
    paths: PathStore,
    listeners: ListenerRegistry,
}

impl Cache {
    /// Creates a cache, hydrating from `config.initial_state` if given.
    pub fn new(config: CacheConfig) -> CacheResult<Self> {
        if config.id_fields.is_empty() {
            return Err(CacheError::InvalidConfig(
                "idFields must name at least one field".to_string(),
            ));
        }

        let snapshot = config.initial_state.unwrap_or_default();
        let dangling = snapshot.dangling_references();
        if !dangling.is_empty() {
            warn!(count = dangling.len(), "initial state references entities it does not contain");
        }
        debug!(
            entities = snapshot.objects_map.len(),
            paths = snapshot.paths_map.len(),
            id_fields = ?config.id_fields,
            "cache created"
        );

        Ok(Self::from_parts(IdentityResolver::new(config.id_fields), snapshot))
    }

    fn from_parts(resolver: IdentityResolver, snapshot: Snapshot) -> Self {
        Self {
            resolver,
            entities: snapshot.objects_map,
            paths: snapshot.paths_map,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Creates a cache from a JSON snapshot, e.g. server-rendered state.
    /// Any `initial_state` already on `config` is replaced.
    pub fn from_snapshot_json(json: &str, config: CacheConfig) -> CacheResult<Self> {
        let snapshot = Snapshot::from_json(json)?;
        Self::new(config.with_initial_state(snapshot))
    }

    /// Stores a response.
    ///
    /// `data` maps root response keys to result values. Each root field of
    /// `request` present in `data` is normalized and its reference tree is
    /// stored under the field's signature. Listeners are then invoked with,
    /// and the call returns, the entities this write created or changed.
    pub fn write(&mut self, request: &Request, data: &Value) -> CacheResult<Objects> {
        let Some(root) = data.as_object() else {
            return Err(CacheError::InvalidData(format!(
                "expected an object of root fields, got {}",
                value_kind(data)
            )));
        };

        let mut normalizer =
            Normalizer::new(&self.resolver, &mut self.entities, &request.variables);
        let mut written = 0;
        for field in &request.query {
            let Some(value) = root.get(field.response_key()) else {
                debug!(field = field.response_key(), "root field absent from response");
                continue;
            };
            let tree = normalizer.normalize_root(field, value);
            let signature = build_signature(field, &request.variables);
            trace!(%signature, "path stored");
            self.paths.insert(signature, tree);
            written += 1;
        }
        warn_unselected(request, root);

        let merges = normalizer.merges();
        let changed = normalizer.finish();
        let objects: Objects = changed
            .into_iter()
            .filter_map(|key| self.entities.get(&key).cloned().map(|e| (key, e)))
            .collect();

        debug!(
            root_fields = written,
            merges,
            changed = objects.len(),
            "write applied"
        );
        self.listeners.notify(&objects);
        Ok(objects)
    }

    /// Reads a request in standard mode. `None` means at least one root
    /// field is not cached.
    pub fn read(&self, request: &Request) -> Option<ReadResult> {
        self.read_with(request, ReadMode::Standard)
    }

    /// Reads a request in full mode; see [`ReadMode::Full`].
    pub fn read_full(&self, request: &Request) -> Option<ReadResult> {
        self.read_with(request, ReadMode::Full)
    }

    /// Reads a request in the given mode. `None` means at least one root
    /// field is not cached.
    pub fn read_with(&self, request: &Request, mode: ReadMode) -> Option<ReadResult> {
        let signatures = request_signatures(request);

        let mut trees = Vec::with_capacity(signatures.len());
        for (field, signature) in &signatures {
            match self.paths.get(signature) {
                Some(tree) => trees.push((*field, tree)),
                None => {
                    debug!(%signature, "cache miss");
                    return None;
                }
            }
        }

        let mut reader = Reader::new(&self.entities, &request.variables, mode);
        let mut data = Map::new();
        for (field, tree) in trees {
            let value = reader.read_node(tree, field.subfields());
            data.insert(field.response_key().to_string(), value);
        }
        let objects = reader.into_objects();

        debug!(root_fields = data.len(), objects = objects.len(), ?mode, "cache hit");
        Some(ReadResult {
            data: Value::Object(data),
            objects,
        })
    }

    /// Registers a listener invoked after every successful write.
    pub fn listen<F>(&self, callback: F) -> Unlisten
    where
        F: Fn(&Objects) + Send + Sync + 'static,
    {
        self.listeners.listen(callback)
    }

    /// Returns a deep copy of both stores.
    pub fn flush(&self) -> Snapshot {
        Snapshot::new(self.entities.clone(), self.paths.clone())
    }

    /// Returns the stored record for an identity.
    pub fn entity(&self, key: &EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    /// Renders an entity's full current state with references resolved.
    pub fn resolve_entity(&self, key: &EntityKey) -> Option<Value> {
        if !self.entities.contains(key) {
            return None;
        }
        let variables = Variables::new();
        let mut reader = Reader::new(&self.entities, &variables, ReadMode::Full);
        Some(reader.read_entity(key, None))
    }

    /// The id fields this cache was built with.
    pub fn id_fields(&self) -> &[String] {
        self.resolver.id_fields()
    }

    /// The entity store, read-only.
    pub fn entities(&self) -> &EntityStore {
        &self.entities
    }

    /// The path store, read-only.
    pub fn paths(&self) -> &PathStore {
        &self.paths
    }

    /// Number of active listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::from_parts(IdentityResolver::default(), Snapshot::default())
    }
}

fn warn_unselected(request: &Request, root: &Map<String, Value>) {
    for key in root.keys() {
        if !request.query.iter().any(|f| f.response_key() == key) {
            warn!(field = %key, "response field has no root selection, ignored");
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
