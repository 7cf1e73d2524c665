use anyhow::Result;
use clap::Parser;

use recipsum::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
