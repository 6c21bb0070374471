//! In-memory storage for gqlcache.
//!
//! Two flat maps hold everything the cache knows:
//!
//! - [`EntityStore`]: entity key → [`Entity`](gqlcache_model::Entity). Grows
//!   monotonically; entries are merged, never deleted.
//! - [`PathStore`]: root-field signature → reference tree.
//!
//! A [`Snapshot`] is a deep copy of both maps. It serializes to JSON with the
//! `objectsMap` / `pathsMap` layout, so a cache can be hydrated from a prior
//! session or from server-rendered state.

mod entity_store;
mod error;
mod path_store;
mod snapshot;

pub use entity_store::EntityStore;
pub use error::{StoreError, StoreResult};
pub use path_store::PathStore;
pub use snapshot::Snapshot;
