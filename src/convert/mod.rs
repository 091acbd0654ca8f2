//! Category conversion drive.
//!
//! Walks each entity category's source directories, parses every resource
//! file into a document, applies the category's path rewrites and injected
//! fields, and writes one pretty-printed JSON file per category.
//!
//! A single unreadable or sectionless file is skipped with a warning; it
//! never aborts the rest of the batch.

pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery::{scan_category_dir, Manifest};
use crate::error::{Result, TresonError};
use crate::output::Printer;
use crate::parser::parse_resource;
use crate::types::{Document, Value};

use paths::rewrite_path_fields;

/// Entity categories, each aggregated into one output JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Monsters,
    Skills,
    Heroes,
    Items,
}

impl Category {
    /// All categories, in conversion order.
    pub const ALL: [Category; 4] = [
        Category::Monsters,
        Category::Skills,
        Category::Heroes,
        Category::Items,
    ];

    /// The category name, also the output file stem.
    pub fn name(self) -> &'static str {
        match self {
            Category::Monsters => "monsters",
            Category::Skills => "skills",
            Category::Heroes => "heroes",
            Category::Items => "items",
        }
    }

    /// Singular noun for status output.
    pub fn singular(self) -> &'static str {
        match self {
            Category::Monsters => "monster",
            Category::Skills => "skill",
            Category::Heroes => "hero",
            Category::Items => "item",
        }
    }
}

/// One source directory feeding a category, with its per-document
/// post-processing.
struct SourceRule {
    dir: PathBuf,
    /// Fields holding engine asset paths to rewrite.
    path_fields: &'static [&'static str],
    /// Field injected into every document from this directory.
    inject: Option<(&'static str, Value)>,
    /// Label for per-document status lines, e.g. "monster skill".
    label: &'static str,
}

/// The source directories and post-processing rules for one category.
fn category_rules(manifest: &Manifest, category: Category) -> Vec<SourceRule> {
    let dirs = &manifest.categories;
    match category {
        Category::Monsters => vec![SourceRule {
            dir: manifest.resolve(&dirs.monsters),
            path_fields: &["sprite_path", "portrait_path"],
            inject: None,
            label: "monster",
        }],
        Category::Skills => vec![
            SourceRule {
                dir: manifest.resolve(&dirs.skills),
                path_fields: &["icon_path"],
                inject: None,
                label: "skill",
            },
            SourceRule {
                dir: manifest.resolve(&dirs.monster_skills),
                path_fields: &["icon_path"],
                inject: Some(("is_monster_skill", Value::Bool(true))),
                label: "monster skill",
            },
        ],
        Category::Heroes => vec![
            SourceRule {
                dir: manifest.resolve(&dirs.heroes),
                path_fields: &["sprite_path", "portrait_path", "battle_sprite_path"],
                inject: None,
                label: "hero",
            },
            SourceRule {
                dir: manifest.resolve(&dirs.hero_skills),
                path_fields: &[],
                inject: None,
                label: "hero skill",
            },
        ],
        Category::Items => vec![
            SourceRule {
                dir: manifest.resolve(&dirs.consumables),
                path_fields: &["icon_path"],
                inject: Some(("item_category", Value::String("consumables".into()))),
                label: "item",
            },
            SourceRule {
                dir: manifest.resolve(&dirs.equipment),
                path_fields: &["icon_path"],
                inject: Some(("item_category", Value::String("equipment".into()))),
                label: "item",
            },
        ],
    }
}

/// Outcome of converting one category.
#[derive(Debug)]
pub struct CategoryReport {
    pub category: Category,
    /// Documents written to the category file.
    pub converted: usize,
    /// Files skipped (unreadable, or no resource section).
    pub skipped: usize,
    /// The written JSON file.
    pub output: PathBuf,
}

/// Convert all categories and write one JSON file each.
pub fn convert_all(manifest: &Manifest, printer: &Printer) -> Result<Vec<CategoryReport>> {
    fs::create_dir_all(&manifest.output).map_err(|e| TresonError::Io {
        path: manifest.output.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    Category::ALL
        .iter()
        .map(|&category| convert_category(manifest, printer, category))
        .collect()
}

/// Convert one category: parse its source files, post-process, and write
/// `<output>/<category>.json`.
pub fn convert_category(
    manifest: &Manifest,
    printer: &Printer,
    category: Category,
) -> Result<CategoryReport> {
    let mut documents: Vec<Document> = Vec::new();
    let mut skipped = 0;

    for rule in category_rules(manifest, category) {
        for path in scan_category_dir(&rule.dir) {
            let source = match fs::read_to_string(&path) {
                Ok(source) => source,
                Err(e) => {
                    printer.warning("Skipping", &format!("{}: {}", path.display(), e));
                    skipped += 1;
                    continue;
                }
            };

            // No [resource] section, or a section with no data fields:
            // nothing to convert
            let Some(mut document) = parse_resource(&source).filter(|d| !d.is_empty()) else {
                skipped += 1;
                continue;
            };

            if let Some((key, value)) = &rule.inject {
                document.insert(*key, value.clone());
            }
            rewrite_path_fields(&mut document, rule.path_fields);

            printer.status(
                "Converted",
                &format!("{} ({})", document_label(&document, &path), rule.label),
            );
            documents.push(document);
        }
    }

    let output = manifest.output.join(format!("{}.json", category.name()));
    write_category_json(&documents, &output)?;

    Ok(CategoryReport {
        category,
        converted: documents.len(),
        skipped,
        output,
    })
}

/// Serialize a category's documents as pretty-printed JSON.
fn write_category_json(documents: &[Document], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(documents).map_err(|e| TresonError::Convert {
        message: format!("Failed to serialize {}: {}", path.display(), e),
        help: None,
    })?;

    fs::write(path, json).map_err(|e| TresonError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write output: {}", e),
    })
}

/// Name shown in status output: the document's display name, falling back
/// to the file stem.
fn document_label(document: &Document, path: &Path) -> String {
    document
        .display_name()
        .map(str::to_string)
        .unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("?")
                .to_string()
        })
}
