//! Packager configuration.
//!
//! Captures the directory layout and naming conventions the packager works
//! with: the working directory holding the `chapter-*` folders, the
//! repository root (its parent), the license file copied into each code
//! folder, and the fixed commit message and remote name used to publish.

use std::path::{Path, PathBuf};

use crate::core::errors::{PackError, Result};

/// Name of the license file at the repository root.
pub const DEFAULT_LICENSE_FILE: &str = "LICENSE.md";

/// Folder-name prefix shared by every chapter's code folder; the chapter
/// number is appended to form e.g. `UntitledGuiGuide_1.1.4`.
pub const DEFAULT_CODE_FOLDER_PREFIX: &str = "UntitledGuiGuide_1.1.";

/// Commit message used when publishing repackaged archives.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Repackage example code";

/// Remote the publish commit is pushed to.
pub const DEFAULT_REMOTE: &str = "origin";

/// Configuration for a packaging run.
#[derive(Debug, Clone)]
pub struct PackagerConfig {
    work_dir: PathBuf,
    repo_root: PathBuf,
    license_file: String,
    code_folder_prefix: String,
    commit_message: String,
    remote: String,
}

impl PackagerConfig {
    /// Build a configuration rooted at the given working directory.
    ///
    /// The working directory is the one containing the `chapter-*` folders;
    /// the repository root is its immediate parent.
    pub fn for_dir(work_dir: impl AsRef<Path>) -> Result<Self> {
        let work_dir = work_dir.as_ref();
        let work_dir = work_dir.canonicalize().map_err(|err| {
            PackError::io(
                format!("working directory not accessible: {}", work_dir.display()),
                err,
            )
        })?;

        let repo_root = work_dir
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                PackError::validation_path(
                    "working directory has no parent to use as repository root",
                    work_dir.display().to_string(),
                )
            })?;

        Ok(Self {
            work_dir,
            repo_root,
            license_file: DEFAULT_LICENSE_FILE.to_string(),
            code_folder_prefix: DEFAULT_CODE_FOLDER_PREFIX.to_string(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
        })
    }

    /// Override the license file name.
    pub fn with_license_file(mut self, name: impl Into<String>) -> Self {
        self.license_file = name.into();
        self
    }

    /// Override the code-folder prefix.
    pub fn with_code_folder_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.code_folder_prefix = prefix.into();
        self
    }

    /// Override the commit message.
    pub fn with_commit_message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = message.into();
        self
    }

    /// Override the remote name.
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    /// Directory containing the `chapter-*` folders.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Repository root (the working directory's parent).
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Path of the license file at the repository root.
    pub fn license_path(&self) -> PathBuf {
        self.repo_root.join(&self.license_file)
    }

    /// License file name, as copied into each code folder.
    pub fn license_file(&self) -> &str {
        &self.license_file
    }

    /// Code-folder name for the given chapter number.
    pub fn code_folder_name(&self, chapter_number: &str) -> String {
        format!("{}{}", self.code_folder_prefix, chapter_number)
    }

    /// Commit message for the publish commit.
    pub fn commit_message(&self) -> &str {
        &self.commit_message
    }

    /// Remote name pushed to after committing.
    pub fn remote(&self) -> &str {
        &self.remote
    }
}
