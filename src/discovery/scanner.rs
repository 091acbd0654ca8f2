//! File system scanner for discovering resource files.
//!
//! Each entity category reads from specific project subdirectories, so
//! scans are single-level: nested folders belong to other categories
//! (e.g. `data/skills/monsters` under `data/skills`).

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File extension of Godot text resources.
const RESOURCE_EXTENSION: &str = "tres";

/// Check whether a path names a text resource file.
pub fn is_resource_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == RESOURCE_EXTENSION)
}

/// List the `.tres` files directly inside a category directory.
///
/// A missing directory yields an empty list (the category simply has no
/// entries in this project). Results are sorted by path so conversion
/// output is deterministic across filesystems.
pub fn scan_category_dir(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|p| is_resource_file(p))
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_resource_file() {
        assert!(is_resource_file(Path::new("slime.tres")));
        assert!(is_resource_file(Path::new("data/monsters/slime.tres")));
        assert!(!is_resource_file(Path::new("slime.tscn")));
        assert!(!is_resource_file(Path::new("slime.tres.bak")));
        assert!(!is_resource_file(Path::new("notes.txt")));
        assert!(!is_resource_file(Path::new("tres")));
    }

    #[test]
    fn test_scan_missing_directory() {
        let files = scan_category_dir(Path::new("/nonexistent/data/monsters"));

        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_lists_only_resources() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("slime.tres"), "[resource]\n").unwrap();
        fs::write(dir.path().join("goblin.tres"), "[resource]\n").unwrap();
        fs::write(dir.path().join("readme.md"), "# notes").unwrap();

        let files = scan_category_dir(dir.path());

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| is_resource_file(p)));
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("monsters")).unwrap();
        fs::write(dir.path().join("fireball.tres"), "[resource]\n").unwrap();
        fs::write(dir.path().join("monsters/bite.tres"), "[resource]\n").unwrap();

        let files = scan_category_dir(dir.path());

        // The nested monsters/ folder is a separate category source
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("fireball.tres"));
    }

    #[test]
    fn test_scan_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("zombie.tres"), "[resource]\n").unwrap();
        fs::write(dir.path().join("bat.tres"), "[resource]\n").unwrap();
        fs::write(dir.path().join("mimic.tres"), "[resource]\n").unwrap();

        let files = scan_category_dir(dir.path());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();

        assert_eq!(names, vec!["bat.tres", "mimic.tres", "zombie.tres"]);
    }
}
