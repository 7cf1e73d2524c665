//! Command-line interface for recipsum
//!
//! This module provides the main CLI structure and command handling. It
//! uses clap for argument parsing and dispatches to the command modules.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
pub mod output;

pub use output::Output;

#[derive(Parser)]
#[command(
    name = "recipsum",
    version = env!("CARGO_PKG_VERSION"),
    about = "Parallel reciprocal array sum",
    long_about = "Computes the sum of reciprocals of a numeric array with recursive \
                  divide-and-conquer task decomposition on a rayon worker pool."
)]
pub struct Cli {
    /// Use custom configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the reciprocal sum of an array
    Sum(commands::sum::SumArgs),
    /// Compare sequential and parallel execution times
    Bench(commands::bench::BenchArgs),
    /// Show version information
    Version,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        // Set up logging based on verbosity
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);

        match self.command {
            Some(Commands::Sum(args)) => {
                commands::sum::execute(args, self.config.as_deref(), &output)
            }
            Some(Commands::Bench(args)) => {
                commands::bench::execute(args, self.config.as_deref(), &output)
            }
            Some(Commands::Version) => commands::version::execute(&output),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug,rayon=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
