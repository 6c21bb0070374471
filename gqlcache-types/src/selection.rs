//! Parsed selection trees.
//!
//! A selection tree describes the shape of a request: for each field its
//! name, optional alias, arguments (possibly referencing variables) and, for
//! object-typed fields, the nested selection. Lists are not distinguished
//! here; whether a field holds one object or many is decided by the data.

use crate::request::Variables;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One selected field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Argument>,
    #[serde(default)]
    pub selection: Selection,
}

impl Field {
    /// A scalar field with no arguments.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            arguments: Vec::new(),
            selection: Selection::Leaf,
        }
    }

    /// An object (or list-of-objects) field with a nested selection.
    pub fn object(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            arguments: Vec::new(),
            selection: Selection::Object(fields),
        }
    }

    /// Sets the alias under which the field appears in response data.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Appends an argument, keeping declaration order.
    #[must_use]
    pub fn with_argument(
        mut self,
        name: impl Into<String>,
        value: impl Into<ArgumentValue>,
    ) -> Self {
        self.arguments.push(Argument {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// The key this field occupies in response data: the alias if any,
    /// otherwise the field name.
    #[must_use]
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Returns the nested fields, or `None` for a leaf.
    #[must_use]
    pub fn subfields(&self) -> Option<&[Field]> {
        match &self.selection {
            Selection::Leaf => None,
            Selection::Object(fields) => Some(fields.as_slice()),
        }
    }
}

/// Whether a field is a scalar leaf or selects nested fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Leaf,
    Object(Vec<Field>),
}

/// A named argument on a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    pub value: ArgumentValue,
}

/// An argument value as written in the query, before variable substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ArgumentValue {
    /// An inline literal (`first: 10`, `status: "DRAFT"`).
    Literal(Value),
    /// A `$name` reference into the request variables.
    Variable(String),
    /// A list literal whose elements may reference variables.
    List(Vec<ArgumentValue>),
    /// An input-object literal whose fields may reference variables.
    Object(Vec<(String, ArgumentValue)>),
}

impl ArgumentValue {
    /// Shorthand for a `$name` variable reference.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Substitutes variables, recursively.
    ///
    /// A variable missing from `variables` resolves to `null`, matching how
    /// GraphQL treats an omitted nullable variable.
    #[must_use]
    pub fn resolve(&self, variables: &Variables) -> Value {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Variable(name) => variables.get(name).cloned().unwrap_or(Value::Null),
            Self::List(items) => Value::Array(items.iter().map(|i| i.resolve(variables)).collect()),
            Self::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(name, value)| (name.clone(), value.resolve(variables)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for ArgumentValue {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}
