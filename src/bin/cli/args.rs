//! CLI Argument Structures

use clap::Parser;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tutorial example-code packager
#[derive(Parser)]
#[command(name = "guidepack")]
#[command(version = VERSION)]
#[command(about = "📦 Guidepack - Tutorial Example-Code Packager")]
#[command(long_about = "
Packages each chapter's example-code folder into a zip archive, then commits
and pushes the result to the remote 'origin'.

Run from the directory containing the chapter-* folders; the enclosing git
repository root must be its immediate parent and hold the LICENSE.md that is
bundled into every archive.

Common Usage:

  # Repackage interactively
  guidepack

  # Repackage without the confirmation prompt
  guidepack --yes
")]
pub struct Cli {
    /// Skip the confirmation prompt and repackage immediately
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
