pub mod convert;
pub mod inspect;

use clap::{Parser, Subcommand};

/// treson - Godot resource data converter
#[derive(Parser, Debug)]
#[command(name = "treson")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert resource files into per-category JSON files
    Convert(convert::ConvertArgs),

    /// Parse a single resource file and print it as JSON
    Inspect(inspect::InspectArgs),
}
