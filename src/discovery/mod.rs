//! File discovery and project configuration.
//!
//! Finds the `.tres` resource files for each entity category and loads
//! the optional `treson.yaml` manifest describing the project layout.

mod manifest;
mod scanner;

pub use manifest::{CategoryDirs, Manifest, MANIFEST_FILENAME};
pub use scanner::{is_resource_file, scan_category_dir};
