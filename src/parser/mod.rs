//! Parser modules for Godot `.tres` resource files.
//!
//! This module turns the textual `[resource]` section of a resource file
//! into a [`Document`](crate::types::Document) of classified values.
//!
//! # Pipeline
//!
//! - Section extraction: everything after the `[resource]` marker
//! - Assignment splitting: `key = value` lines, comments and script
//!   bindings filtered out
//! - Value classification: scalars, geometric/colour literals, and nested
//!   array/dictionary literals, with a raw-text fallback
//!
//! # Usage
//!
//! ```ignore
//! use treson::parser::parse_resource;
//!
//! let source = std::fs::read_to_string("data/monsters/slime.tres")?;
//! if let Some(doc) = parse_resource(&source) {
//!     println!("{} fields", doc.len());
//! }
//! ```
//!
//! The parser holds no state between calls and never fails on malformed
//! content; see [`value::classify`] for the fallback rules. Deeply nested
//! literals recurse per nesting level, so call-stack depth is the only
//! bound on nesting.

mod section;
pub mod assignment;
pub mod value;

mod resource;

// Re-export main entry points
pub use assignment::Assignments;
pub use resource::parse_resource;
pub use section::resource_section;
pub use value::{classify, parse_array, parse_map};
