//! Whole-file parsing: resource section to [`Document`].

use crate::types::Document;

use super::assignment::Assignments;
use super::section::resource_section;
use super::value::classify;

/// Parse the `[resource]` section of a `.tres` file into a document.
///
/// Returns `None` when the file has no resource section; callers treat
/// that as "nothing to convert", not a failure. Duplicate keys resolve
/// last-write-wins.
pub fn parse_resource(source: &str) -> Option<Document> {
    let section = resource_section(source)?;

    let mut document = Document::new();
    for (key, raw) in Assignments::new(section) {
        document.insert(key, classify(raw));
    }
    Some(document)
}
