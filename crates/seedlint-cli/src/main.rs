//! # seedlint CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use seedlint_cli::discover::{run_discover, DiscoverArgs};
use seedlint_cli::validate::{run_validate, ValidateArgs};

/// seedlint: structural checks for topic and post content files.
///
/// Validates a directory of YAML topic, post, and post-batch definitions:
/// required fields, topic references, API-user attribution, and triggers.
#[derive(Parser, Debug)]
#[command(name = "seedlint", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate every content file in a directory; fail on the first error.
    Validate(ValidateArgs),

    /// List the content files a run would see, with their declared types.
    Discover(DiscoverArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "seedlint starting");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Discover(args) => run_discover(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
