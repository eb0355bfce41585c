//! Error types for the guidepack library.
//!
//! Structured error types that preserve context from the underlying
//! filesystem, archive, and version-control layers, so failures propagate
//! with enough information to diagnose which step of the run broke.

use std::io;

use thiserror::Error;

/// Main result type for guidepack operations.
pub type Result<T> = std::result::Result<T, PackError>;

/// Error type for all packaging operations.
#[derive(Error, Debug)]
pub enum PackError {
    /// I/O related errors (copying the license, creating archives, etc.)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Version-control errors (status, staging, commit, push)
    #[error("Git error: {message}")]
    Git {
        /// Human-readable error message
        message: String,
        /// Underlying git2 error
        #[source]
        source: git2::Error,
    },

    /// Archive creation errors
    #[error("Archive error: {message}")]
    Archive {
        /// Human-readable error message
        message: String,
        /// Underlying zip error, when one exists
        #[source]
        source: Option<zip::result::ZipError>,
    },

    /// Validation errors for the expected directory layout
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Path that failed validation
        path: Option<String>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
    },
}

impl PackError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new version-control error with context
    pub fn git(message: impl Into<String>, source: git2::Error) -> Self {
        Self::Git {
            message: message.into(),
            source,
        }
    }

    /// Create a new archive error with context
    pub fn archive(message: impl Into<String>, source: zip::result::ZipError) -> Self {
        Self::Archive {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            path: None,
        }
    }

    /// Create a new validation error carrying the offending path
    pub fn validation_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<git2::Error> for PackError {
    fn from(source: git2::Error) -> Self {
        Self::git("git operation failed", source)
    }
}

impl From<zip::result::ZipError> for PackError {
    fn from(source: zip::result::ZipError) -> Self {
        Self::Archive {
            message: "zip operation failed".to_string(),
            source: Some(source),
        }
    }
}
