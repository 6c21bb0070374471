//! Entity identity resolution.
//!
//! An object's identity is the concatenation of its id-field values, in the
//! configured order, with no separator. An object missing any id field (or
//! holding `null` or a non-scalar there) has no identity and is kept inline
//! by the normalizer.

use gqlcache_types::EntityKey;
use serde_json::{Map, Value};

/// Id fields used when none are configured.
pub const DEFAULT_ID_FIELDS: [&str; 2] = ["__typename", "id"];

/// Computes composite entity keys from a fixed, ordered list of field names.
///
/// The list is fixed for the lifetime of a cache; changing it would orphan
/// every key already stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityResolver {
    id_fields: Vec<String>,
}

impl IdentityResolver {
    pub fn new<I, S>(id_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id_fields: id_fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the configured id fields, in order.
    pub fn id_fields(&self) -> &[String] {
        &self.id_fields
    }

    /// Resolves the identity of a response object, if it has one.
    pub fn resolve(&self, object: &Map<String, Value>) -> Option<EntityKey> {
        if self.id_fields.is_empty() {
            return None;
        }

        let mut key = String::new();
        for field in &self.id_fields {
            match object.get(field)? {
                Value::String(s) => key.push_str(s),
                Value::Number(n) => key.push_str(&n.to_string()),
                Value::Bool(b) => key.push_str(if *b { "true" } else { "false" }),
                Value::Null | Value::Array(_) | Value::Object(_) => return None,
            }
        }
        Some(EntityKey::new(key))
    }
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ID_FIELDS)
    }
}
