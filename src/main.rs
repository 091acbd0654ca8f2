use clap::Parser;
use miette::Result;
use treson::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => treson::cli::convert::run(args)?,
        Commands::Inspect(args) => treson::cli::inspect::run(args)?,
    }

    Ok(())
}
