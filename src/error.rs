//! Error type for directory resolution.

use thiserror::Error;

/// Every error a directory lookup can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The folder name is not one of the known special folders.
    #[error("Unknown CSIDL name: {0}")]
    InvalidArgument(String),

    /// The OS (or a fallback source) could not produce a path.
    #[error("Failed to resolve {folder}: {reason}")]
    ResolutionFailed { folder: String, reason: String },

    /// No directory layout is known for this target.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

impl DirectoryError {
    pub(crate) fn resolution_failed(folder: impl Into<String>, reason: impl Into<String>) -> Self {
        DirectoryError::ResolutionFailed {
            folder: folder.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DirectoryError>;
