//! Command Execution Logic and Console Output

use std::io::{self, BufRead, Write};

use console::style;
use tracing::debug;

use guidepack::vcs::GitClient;
use guidepack::{Packager, PackagerConfig, Progress};

use crate::cli::args::Cli;

/// Run the repackaging command end to end.
pub fn repackage_command(cli: Cli) -> anyhow::Result<()> {
    if !cli.yes && !confirm()? {
        debug!("confirmation declined");
        return Ok(());
    }

    let config = PackagerConfig::for_dir(".")?;
    let vcs = GitClient::open(config.repo_root())?;
    let mut packager = Packager::new(config, vcs);

    let outcome = packager.run(report_progress)?;
    debug!(?outcome, "run finished");
    Ok(())
}

/// Interactive confirmation gate. Only the exact answer `y` proceeds.
fn confirm() -> anyhow::Result<bool> {
    print!("Sure to repackage example code? (y/n): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim_end_matches(['\r', '\n']) == "y")
}

/// Print a progress line for each packaging event.
fn report_progress(event: Progress<'_>) {
    match event {
        Progress::DirtyTree => {
            println!("- {}", style("repository is dirty, aborting").yellow());
        }
        Progress::ChapterPackaged { number } => {
            println!("- {}", style(format!("Chapter {number} packaged")).green());
        }
        Progress::PushStarted => {
            print!("Pushing changes ... ");
            let _ = io::stdout().flush();
        }
        Progress::PushFinished => {
            println!("{}", style("done").green());
        }
    }
}
