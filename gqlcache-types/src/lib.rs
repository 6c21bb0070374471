//! Core type definitions for gqlcache.
//!
//! This crate defines the plain data types shared by every layer of the
//! cache:
//! - [`Field`] / [`Selection`] — the parsed selection tree handed over by the
//!   query compiler
//! - [`Request`] — a selection tree paired with its variable values
//! - [`Node`] — a reference tree, the normalized shape of one root field
//! - [`EntityKey`] / [`Signature`] — identity and path-store keys
//!
//! Nothing here parses GraphQL source text. Selection trees arrive already
//! built, either in code or deserialized from the compiler's JSON output.

mod ids;
mod node;
mod request;
mod selection;

pub use ids::{EntityKey, Signature};
pub use node::Node;
pub use request::{Request, Variables};
pub use selection::{Argument, ArgumentValue, Field, Selection};
