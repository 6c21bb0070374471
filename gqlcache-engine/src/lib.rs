//! Normalized, in-memory cache for GraphQL query results.
//!
//! Sits between a transport and UI bindings. Responses are flattened into an
//! entity store keyed by identity; each root field's shape is kept as a
//! reference tree under a structural signature; reads rebuild result data
//! from the current entities, so updates to a shared entity show up in
//! every query that includes it.
//!
//! # Example
//!
//! ```
//! use gqlcache_engine::{Cache, CacheConfig};
//! use gqlcache_types::{ArgumentValue, Field, Request};
//! use serde_json::json;
//!
//! let mut cache = Cache::new(CacheConfig::default().with_id_fields(["id"])).unwrap();
//! let request = Request::new(vec![Field::object(
//!     "post",
//!     vec![Field::leaf("id"), Field::leaf("title")],
//! )
//! .with_argument("id", ArgumentValue::variable("id"))])
//! .with_variable("id", "p1");
//!
//! cache
//!     .write(&request, &json!({"post": {"id": "p1", "title": "A"}}))
//!     .unwrap();
//!
//! let result = cache.read(&request).unwrap();
//! assert_eq!(result.data, json!({"post": {"id": "p1", "title": "A"}}));
//! ```

mod cache;
mod config;
mod denormalize;
mod error;
mod listeners;
mod normalize;
pub mod signature;

pub use cache::Cache;
pub use config::CacheConfig;
pub use denormalize::{ReadMode, ReadResult};
pub use error::{CacheError, CacheResult};
pub use listeners::{ListenerRegistry, Objects, Unlisten};
pub use signature::{build_signature, request_signatures, storage_key};
