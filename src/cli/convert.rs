//! Convert command implementation.
//!
//! Runs the full four-category conversion and prints a per-category
//! summary.

use std::path::PathBuf;

use clap::Args;

use crate::convert::convert_all;
use crate::discovery::{Manifest, MANIFEST_FILENAME};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

/// Convert resource files into per-category JSON files
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Godot project root to read resource files from
    #[arg(long, short)]
    pub source: Option<PathBuf>,

    /// Output directory for the category JSON files
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Manifest file (defaults to treson.yaml in the source root)
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let printer = Printer::new();
    let manifest = load_manifest(&args)?;

    let reports = convert_all(&manifest, &printer)?;

    let mut total = 0;
    let mut skipped = 0;
    for report in &reports {
        let name = report.category.name();
        printer.info(
            "Wrote",
            &format!(
                "{} ({})",
                display_path(&report.output),
                plural(report.converted, report.category.singular(), name)
            ),
        );
        total += report.converted;
        skipped += report.skipped;
    }

    let mut summary = format!(
        "{} to {}",
        plural(total, "document", "documents"),
        display_path(&manifest.output)
    );
    if skipped > 0 {
        summary.push_str(&format!(" ({} skipped)", plural(skipped, "file", "files")));
    }
    printer.success("Finished", &summary);

    Ok(())
}

/// Resolve the effective manifest: an explicit `--manifest` file, else
/// `treson.yaml` in the source root when present, else defaults. CLI
/// flags override the manifest's source and output.
fn load_manifest(args: &ConvertArgs) -> Result<Manifest> {
    let mut manifest = if let Some(path) = &args.manifest {
        Manifest::load(path)?
    } else {
        let root = args.source.clone().unwrap_or_else(|| PathBuf::from("."));
        let candidate = root.join(MANIFEST_FILENAME);
        if candidate.exists() {
            Manifest::load(&candidate)?
        } else {
            Manifest::default()
        }
    };

    if let Some(source) = &args.source {
        manifest.source = source.clone();
    }
    if let Some(output) = &args.output {
        manifest.output = output.clone();
    }

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_manifest_defaults() {
        let dir = tempdir().unwrap();
        let args = ConvertArgs {
            source: Some(dir.path().to_path_buf()),
            output: None,
            manifest: None,
        };

        let manifest = load_manifest(&args).unwrap();

        assert_eq!(manifest.source, dir.path());
        assert_eq!(manifest.output, PathBuf::from("export"));
    }

    #[test]
    fn test_load_manifest_from_source_root() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: build/json\n").unwrap();

        let args = ConvertArgs {
            source: Some(dir.path().to_path_buf()),
            output: None,
            manifest: None,
        };

        let manifest = load_manifest(&args).unwrap();

        assert_eq!(manifest.output, PathBuf::from("build/json"));
        // --source still wins over the manifest's source field
        assert_eq!(manifest.source, dir.path());
    }

    #[test]
    fn test_cli_output_overrides_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: build/json\n").unwrap();

        let args = ConvertArgs {
            source: Some(dir.path().to_path_buf()),
            output: Some(PathBuf::from("elsewhere")),
            manifest: None,
        };

        let manifest = load_manifest(&args).unwrap();

        assert_eq!(manifest.output, PathBuf::from("elsewhere"));
    }

    #[test]
    fn test_explicit_manifest_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "source: /games/veil\n").unwrap();

        let args = ConvertArgs {
            source: None,
            output: None,
            manifest: Some(path),
        };

        let manifest = load_manifest(&args).unwrap();

        assert_eq!(manifest.source, PathBuf::from("/games/veil"));
    }

    #[test]
    fn test_missing_explicit_manifest_is_an_error() {
        let args = ConvertArgs {
            source: None,
            output: None,
            manifest: Some(PathBuf::from("/nonexistent/treson.yaml")),
        };

        assert!(load_manifest(&args).is_err());
    }
}
