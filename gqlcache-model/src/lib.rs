//! Entity model for gqlcache.
//!
//! Defines the types every normalized object passes through:
//! - [`Entity`] — a flat record of fields, nested entities replaced by references
//! - [`IdentityResolver`] — derives an [`EntityKey`](gqlcache_types::EntityKey)
//!   from configured id fields
//! - [`merge_entities`] — the additive shallow merge applied on every write
//!
//! These types are consumed by the stores and the engine. They hold no
//! global state.

mod entity;
mod identity;
mod merge;

pub use entity::Entity;
pub use identity::{IdentityResolver, DEFAULT_ID_FIELDS};
pub use merge::merge_entities;
