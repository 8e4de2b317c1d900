use std::path::{Path, PathBuf};

use thiserror::Error;

/// Unified error type for mobile-version-up operations
#[derive(Error, Debug)]
pub enum VersionUpError {
    #[error("Cannot read manifest {}: {reason}", path.display())]
    ManifestRead { path: PathBuf, reason: String },

    #[error("Cannot update manifest {}: {reason}", path.display())]
    ManifestWrite { path: PathBuf, reason: String },

    #[error("Invalid {component} version component: '{value}' is not a non-negative integer")]
    InvalidVersionComponent { component: String, value: String },

    #[error("Version out of range: {0}")]
    VersionOutOfRange(String),

    #[error("Process canceled.")]
    UserCancelled,

    #[error("Version control operation failed: {0}")]
    VersionControl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in mobile-version-up
pub type Result<T> = std::result::Result<T, VersionUpError>;

impl VersionUpError {
    /// Create a manifest read error for the given file
    pub fn manifest_read(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        VersionUpError::ManifestRead {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a manifest write error for the given file
    pub fn manifest_write(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        VersionUpError::ManifestWrite {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create an invalid component error (e.g. `major` = "abc")
    pub fn invalid_component(component: impl Into<String>, value: impl Into<String>) -> Self {
        VersionUpError::InvalidVersionComponent {
            component: component.into(),
            value: value.into(),
        }
    }

    /// Create an out-of-range error for arithmetic that no longer fits in `u64`
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        VersionUpError::VersionOutOfRange(msg.into())
    }

    /// Create a version control error with context
    pub fn version_control(msg: impl Into<String>) -> Self {
        VersionUpError::VersionControl(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionUpError::Config(msg.into())
    }

    /// Whether this error is the operator declining to continue rather than a fault
    pub fn is_cancellation(&self) -> bool {
        matches!(self, VersionUpError::UserCancelled)
    }
}

impl From<git2::Error> for VersionUpError {
    fn from(e: git2::Error) -> Self {
        VersionUpError::VersionControl(e.message().to_string())
    }
}
