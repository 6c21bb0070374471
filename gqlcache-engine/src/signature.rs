//! Selection signatures.
//!
//! A signature renders one field and everything below it:
//!
//! ```text
//! post(id:"p1"){id title author{id name}}
//! ```
//!
//! - the field name, prefixed by `alias:` when aliased
//! - resolved arguments sorted by name, values as canonical JSON
//! - nested fields in declaration order, separated by single spaces
//!
//! Arguments at every depth are part of the enclosing root signature, so two
//! root fields share a cache entry only if their whole subtrees agree.
//!
//! Inside an entity, a field is stored under its [`storage_key`]: the field
//! name plus resolved arguments, never the alias. `posts(first:1)` and
//! `posts(first:3)` get separate slots; `t: title` and `title` share one.

use gqlcache_types::{Field, Request, Selection, Signature, Variables};
use serde_json::Value;
use std::fmt::Write;

/// Builds the signature of a root-level field.
pub fn build_signature(field: &Field, variables: &Variables) -> Signature {
    let mut out = String::new();
    write_field(&mut out, field, variables);
    Signature::new(out)
}

/// Builds one signature per root field of a request, in declaration order.
pub fn request_signatures<'a>(request: &'a Request) -> Vec<(&'a Field, Signature)> {
    request
        .query
        .iter()
        .map(|field| (field, build_signature(field, &request.variables)))
        .collect()
}

/// Builds the key a field's value is stored under inside an entity.
pub fn storage_key(field: &Field, variables: &Variables) -> String {
    let mut out = field.name.clone();
    write_arguments(&mut out, field, variables);
    out
}

fn write_field(out: &mut String, field: &Field, variables: &Variables) {
    if let Some(alias) = &field.alias {
        out.push_str(alias);
        out.push(':');
    }
    out.push_str(&field.name);
    write_arguments(out, field, variables);

    if let Selection::Object(fields) = &field.selection {
        out.push('{');
        for (i, sub) in fields.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            write_field(out, sub, variables);
        }
        out.push('}');
    }
}

fn write_arguments(out: &mut String, field: &Field, variables: &Variables) {
    if !field.arguments.is_empty() {
        let mut args: Vec<(&str, Value)> = field
            .arguments
            .iter()
            .map(|arg| (arg.name.as_str(), arg.value.resolve(variables)))
            .collect();
        args.sort_by(|(a, _), (b, _)| a.cmp(b));

        out.push('(');
        for (i, (name, value)) in args.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            // serde_json's Display is compact and object keys come out
            // sorted, which keeps input objects canonical.
            let _ = write!(out, "{name}:{value}");
        }
        out.push(')');
    }
}
