//! Inspect command implementation.
//!
//! Parses one resource file and prints the resulting document as JSON on
//! stdout, for eyeballing what the converter would emit for a file.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, TresonError};
use crate::parser::parse_resource;

/// Parse a single resource file and print it as JSON
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Resource file to parse
    pub file: PathBuf,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: InspectArgs) -> Result<()> {
    let source = fs::read_to_string(&args.file).map_err(|e| TresonError::Io {
        path: args.file.clone(),
        message: format!("Failed to read file: {}", e),
    })?;

    let document = parse_resource(&source).ok_or_else(|| TresonError::Convert {
        message: format!("{} has no [resource] section", args.file.display()),
        help: Some("Only .tres files with a [resource] section carry data fields".to_string()),
    })?;

    let json = if args.compact {
        serde_json::to_string(&document)
    } else {
        serde_json::to_string_pretty(&document)
    }
    .map_err(|e| TresonError::Convert {
        message: format!("Failed to serialize document: {}", e),
        help: None,
    })?;

    println!("{}", json);
    Ok(())
}
