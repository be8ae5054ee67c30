//! CLI entry point for the jigsaw solver

use clap::Parser;
use jigsolve::io::cli::{Cli, FileProcessor};
use tracing_subscriber::EnvFilter;

// Usage errors and a missing input are reported to the user, not as failures
#[allow(clippy::print_stderr)]
fn main() -> jigsolve::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            if error.print().is_err() {
                eprintln!("{error}");
            }
            return Ok(());
        }
    };

    let default_level = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if !cli.input.is_file() {
        eprintln!("'{}' is no file or does not exist.", cli.input.display());
        return Ok(());
    }

    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_outcome| ())
}
