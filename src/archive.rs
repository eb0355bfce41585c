//! Archive creation and the scoped license copy.
//!
//! [`zip_directory`] writes a deflate-compressed zip whose sole top-level
//! entry is the source folder itself, so extracting the archive yields one
//! folder with the original contents. [`LicenseGuard`] holds the temporary
//! license copy placed inside a code folder before archiving and guarantees
//! it is removed again on every exit path, success or failure.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::core::errors::{PackError, Result};

/// Create a zip archive of `source_dir` at `dest_zip`.
///
/// Entry names are rooted at the source folder's own name, so the archive
/// extracts to a single top-level folder.
pub fn zip_directory(source_dir: &Path, dest_zip: &Path) -> Result<()> {
    let root_name = source_dir
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            PackError::validation_path(
                "source folder has no usable name",
                source_dir.display().to_string(),
            )
        })?;

    let file = File::create(dest_zip).map_err(|err| {
        PackError::io(
            format!("failed to create archive {}", dest_zip.display()),
            err,
        )
    })?;
    let mut writer = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(source_dir) {
        let entry =
            entry.map_err(|err| PackError::io("failed to walk code folder", err.into()))?;
        let relative = entry
            .path()
            .strip_prefix(source_dir)
            .map_err(|_| PackError::internal("walked entry escaped the source folder"))?;

        let mut name = root_name.to_string();
        for component in relative.components() {
            let part = component.as_os_str().to_str().ok_or_else(|| {
                PackError::validation_path(
                    "non-UTF-8 file name in code folder",
                    entry.path().display().to_string(),
                )
            })?;
            name.push('/');
            name.push_str(part);
        }

        if entry.file_type().is_dir() {
            writer.add_directory(name, options)?;
        } else {
            writer.start_file(name, options)?;
            let mut source = File::open(entry.path()).map_err(|err| {
                PackError::io(
                    format!("failed to read {}", entry.path().display()),
                    err,
                )
            })?;
            io::copy(&mut source, &mut writer)
                .map_err(|err| PackError::io("failed to write archive entry", err))?;
        }
    }

    writer.finish()?;
    debug!(archive = %dest_zip.display(), "archive written");
    Ok(())
}

/// Temporary copy of the license file inside a code folder.
///
/// Created before archiving, removed after. Dropping the guard removes the
/// copy as well, so an error mid-archive cannot strand a license file in the
/// code folder.
#[derive(Debug)]
pub struct LicenseGuard {
    dest: PathBuf,
    removed: bool,
}

impl LicenseGuard {
    /// Copy `license` into `code_folder`, keeping the file name.
    pub fn copy_into(license: &Path, code_folder: &Path) -> Result<Self> {
        let file_name = license.file_name().ok_or_else(|| {
            PackError::validation_path(
                "license path has no file name",
                license.display().to_string(),
            )
        })?;
        let dest = code_folder.join(file_name);
        fs::copy(license, &dest).map_err(|err| {
            PackError::io(
                format!(
                    "failed to copy {} into {}",
                    license.display(),
                    code_folder.display()
                ),
                err,
            )
        })?;
        debug!(dest = %dest.display(), "license copied");
        Ok(Self {
            dest,
            removed: false,
        })
    }

    /// Path of the temporary copy.
    pub fn path(&self) -> &Path {
        &self.dest
    }

    /// Remove the copy, surfacing any error. Preferred over relying on
    /// `Drop`, which has to swallow failures.
    pub fn remove(mut self) -> Result<()> {
        self.removed = true;
        fs::remove_file(&self.dest).map_err(|err| {
            PackError::io(
                format!("failed to remove license copy {}", self.dest.display()),
                err,
            )
        })
    }
}

impl Drop for LicenseGuard {
    fn drop(&mut self) {
        if !self.removed {
            let _ = fs::remove_file(&self.dest);
        }
    }
}
