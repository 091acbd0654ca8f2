//! treson - Godot resource data converter
//!
//! A library for bulk-converting Godot `.tres` resource files into JSON
//! documents grouped by entity category, for import into another engine.

pub mod cli;
pub mod convert;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;

pub use convert::{convert_all, convert_category, Category, CategoryReport};
pub use discovery::{is_resource_file, scan_category_dir, CategoryDirs, Manifest};
pub use error::{Result, TresonError};
pub use parser::{classify, parse_resource, resource_section, Assignments};
pub use types::{Document, Value};
