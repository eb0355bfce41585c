//! # Guidepack: Tutorial Example-Code Packager
//!
//! Packages the per-chapter example-code folders of a tutorial series into
//! zip archives, then commits and pushes the result. The whole run is a
//! linear sequence:
//!
//! 1. Verify the enclosing repository is clean (abort early if dirty).
//! 2. Discover `chapter-*` folders in the working directory.
//! 3. For each chapter, copy the root license file into its code folder,
//!    archive the folder, and remove the license copy again.
//! 4. Stage everything, commit with a fixed message, and push to `origin`.
//!
//! Version-control access goes through the [`vcs::Vcs`] trait so the
//! packaging logic can be exercised against a fake repository in tests.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use guidepack::{Packager, PackagerConfig, vcs::GitClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PackagerConfig::for_dir(".")?;
//!     let vcs = GitClient::open(config.repo_root())?;
//!     let mut packager = Packager::new(config, vcs);
//!     let outcome = packager.run(|_event| {})?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]

// Core configuration and error types
pub mod core {
    //! Configuration and error types.

    pub mod config;
    pub mod errors;
}

// Archive creation and the scoped license copy
pub mod archive;

// Packaging orchestration
pub mod packager;

// Version-control capability trait and git2 client
pub mod vcs;

// Re-export primary types for convenience
pub use crate::core::config::PackagerConfig;
pub use crate::core::errors::{PackError, Result};
pub use crate::packager::{Outcome, Packager, Progress};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
