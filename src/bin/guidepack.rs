//! Guidepack CLI - Tutorial Example-Code Packager
//!
//! Packages each chapter's example-code folder into a zip archive, then
//! commits and pushes the result. A single confirmation prompt gates the
//! whole run.

use clap::Parser;

mod cli;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    cli::repackage_command(cli)
}
