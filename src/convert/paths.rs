//! Asset path rewriting.
//!
//! Godot stores asset references as `res://`-prefixed URIs; the importing
//! engine wants project-relative paths with forward slashes.

use crate::types::{Document, Value};

/// Engine URI prefix on source asset paths.
pub const ENGINE_PREFIX: &str = "res://";

/// Rewrite one engine path: strip the `res://` prefix and normalize
/// backslashes to forward slashes. Empty input stays empty.
pub fn rewrite_resource_path(path: &str) -> String {
    path.replace(ENGINE_PREFIX, "").replace('\\', "/")
}

/// Rewrite the designated path-valued fields of a document in place.
///
/// Only string fields are rewritten; a null path field becomes an empty
/// string so the importer sees a uniform type. Other value kinds and
/// absent keys are left untouched.
pub fn rewrite_path_fields(document: &mut Document, keys: &[&str]) {
    for key in keys {
        let rewritten = match document.get(key) {
            Some(Value::String(path)) => rewrite_resource_path(path),
            Some(Value::Null) => String::new(),
            _ => continue,
        };
        document.insert(*key, Value::String(rewritten));
    }
}
