//! Project manifest (treson.yaml) parsing.
//!
//! The manifest defines where the source project lives, where the JSON
//! output goes, and which subdirectory feeds each entity category. All
//! fields have defaults matching the conventional project layout, so a
//! manifest is only needed to override them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TresonError};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "treson.yaml";

/// Project manifest loaded from treson.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source project root the category directories are resolved against.
    pub source: PathBuf,

    /// Output directory for the category JSON files.
    pub output: PathBuf,

    /// Category directory layout, relative to `source`.
    pub categories: CategoryDirs,
}

/// Which subdirectory feeds each entity category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryDirs {
    /// Monster definitions.
    pub monsters: PathBuf,

    /// Skill definitions.
    pub skills: PathBuf,

    /// Monster-only skill variants, flagged `is_monster_skill` on output.
    pub monster_skills: PathBuf,

    /// Hero definitions.
    pub heroes: PathBuf,

    /// Hero skill definitions, aggregated with heroes.
    pub hero_skills: PathBuf,

    /// Consumable items.
    pub consumables: PathBuf,

    /// Equipment items.
    pub equipment: PathBuf,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            output: PathBuf::from("export"),
            categories: CategoryDirs::default(),
        }
    }
}

impl Default for CategoryDirs {
    fn default() -> Self {
        Self {
            monsters: PathBuf::from("data/monsters"),
            skills: PathBuf::from("data/skills"),
            monster_skills: PathBuf::from("data/skills/monsters"),
            heroes: PathBuf::from("data/heroes"),
            hero_skills: PathBuf::from("data/skills/heroes"),
            consumables: PathBuf::from("data/items/consumables"),
            equipment: PathBuf::from("data/items/equipment"),
        }
    }
}

impl Manifest {
    /// Load manifest from a treson.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TresonError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| TresonError::Manifest {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check treson.yaml syntax".to_string()),
        })
    }

    /// Resolve a category directory against the source root.
    pub fn resolve(&self, category_dir: &Path) -> PathBuf {
        self.source.join(category_dir)
    }
}
