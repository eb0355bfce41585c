//! Packaging orchestration.
//!
//! Runs the linear packaging sequence: cleanliness check, chapter discovery,
//! per-chapter archiving, then stage/commit/push. Progress is reported
//! through an observer closure so the CLI can print lines as work happens
//! and tests can record the sequence.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::archive::{self, LicenseGuard};
use crate::core::config::PackagerConfig;
use crate::core::errors::{PackError, Result};
use crate::vcs::Vcs;

/// A discovered chapter folder.
#[derive(Debug, Clone)]
pub struct Chapter {
    /// Chapter number, the second `-`-separated token of the folder name.
    pub number: String,
    /// Path of the chapter folder.
    pub path: PathBuf,
}

/// Progress events emitted during a run, in order of occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// The repository has uncommitted changes; the run stops here.
    DirtyTree,
    /// A chapter's archive was written and its license copy removed.
    ChapterPackaged {
        /// Number of the packaged chapter.
        number: &'a str,
    },
    /// The push to the remote is starting.
    PushStarted,
    /// The push completed.
    PushFinished,
}

/// Terminal outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The repository was dirty; nothing was touched.
    DirtyTree,
    /// All chapters were packaged and the commit was pushed.
    Packaged {
        /// Numbers of the packaged chapters, in processing order.
        chapters: Vec<String>,
    },
}

/// Enumerate `chapter-*` directories in the working directory.
///
/// Matches are whatever the filesystem yields; entries that are not
/// directories are skipped.
pub fn discover_chapters(work_dir: &Path) -> Result<Vec<Chapter>> {
    let pattern = work_dir.join("chapter-*");
    let pattern = pattern.to_str().ok_or_else(|| {
        PackError::validation_path(
            "working directory path is not valid UTF-8",
            work_dir.display().to_string(),
        )
    })?;

    let mut chapters = Vec::new();
    let matches = glob::glob(pattern)
        .map_err(|err| PackError::validation(format!("invalid chapter pattern: {err}")))?;
    for entry in matches {
        let path =
            entry.map_err(|err| PackError::io("failed to read chapter folder", err.into_error()))?;
        if !path.is_dir() {
            continue;
        }
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                PackError::validation_path(
                    "chapter folder has no usable name",
                    path.display().to_string(),
                )
            })?;
        let number = name
            .split('-')
            .nth(1)
            .filter(|number| !number.is_empty())
            .ok_or_else(|| {
                PackError::validation_path("chapter folder name has no number", name.to_string())
            })?
            .to_string();
        debug!(chapter = %number, path = %path.display(), "discovered chapter");
        chapters.push(Chapter { number, path });
    }
    Ok(chapters)
}

/// Packages chapter code folders and publishes the result.
pub struct Packager<V: Vcs> {
    config: PackagerConfig,
    vcs: V,
}

impl<V: Vcs> Packager<V> {
    /// Create a packager over the given configuration and repository client.
    pub fn new(config: PackagerConfig, vcs: V) -> Self {
        Self { config, vcs }
    }

    /// Run the full packaging sequence.
    ///
    /// Returns [`Outcome::DirtyTree`] without side effects when the
    /// repository has uncommitted changes. Any filesystem or version-control
    /// failure aborts the run; archives already written are not rolled back,
    /// but the in-flight license copy is always removed.
    pub fn run(&mut self, mut observer: impl FnMut(Progress<'_>)) -> Result<Outcome> {
        if self.vcs.is_dirty()? {
            debug!("repository is dirty, aborting");
            observer(Progress::DirtyTree);
            return Ok(Outcome::DirtyTree);
        }

        let license_path = self.config.license_path();
        let chapters = discover_chapters(self.config.work_dir())?;
        let mut packaged = Vec::with_capacity(chapters.len());

        for chapter in &chapters {
            let folder_name = self.config.code_folder_name(&chapter.number);
            let code_folder = chapter.path.join(&folder_name);
            if !code_folder.is_dir() {
                return Err(PackError::validation_path(
                    format!("chapter {} has no code folder", chapter.number),
                    code_folder.display().to_string(),
                ));
            }

            let guard = LicenseGuard::copy_into(&license_path, &code_folder)?;
            let dest_zip = chapter.path.join(format!("{folder_name}.zip"));
            // The guard's Drop removes the license copy if archiving fails.
            archive::zip_directory(&code_folder, &dest_zip)?;
            guard.remove()?;

            debug!(chapter = %chapter.number, archive = %dest_zip.display(), "chapter packaged");
            observer(Progress::ChapterPackaged {
                number: &chapter.number,
            });
            packaged.push(chapter.number.clone());
        }

        self.vcs.stage_all()?;
        self.vcs.commit(self.config.commit_message())?;
        observer(Progress::PushStarted);
        self.vcs.push(self.config.remote())?;
        observer(Progress::PushFinished);

        Ok(Outcome::Packaged { chapters: packaged })
    }
}
