//! Requests: a selection tree plus the variable values it was issued with.

use crate::selection::Field;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Resolved variable values, keyed by variable name (without the `$`).
pub type Variables = Map<String, Value>;

/// A request as seen by the cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Root-level selections, in declaration order.
    pub query: Vec<Field>,
    #[serde(default)]
    pub variables: Variables,
}

impl Request {
    /// Creates a request with no variables.
    pub fn new(query: Vec<Field>) -> Self {
        Self {
            query,
            variables: Variables::new(),
        }
    }

    /// Sets a single variable value.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Replaces all variables at once.
    #[must_use]
    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }
}
