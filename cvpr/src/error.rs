//! Error types for the cvpr library.
//!
//! Most failures during configuration resolution are recovered locally (an
//! unreadable config file becomes an empty layer, a failed save becomes a
//! warning). The variants here are the ones that either reach the caller or
//! are reported by the loader before being downgraded to a warning.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a cvpr error.
///
/// # Examples
///
/// ```
/// use cvpr::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("1.2.3".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the cvpr library.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred while reading or writing the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid YAML, or could not be serialized.
    #[error("configuration error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// Automatic mode was requested but required values are missing.
    ///
    /// The field names are sorted.
    #[error("Missing required fields: {}", fields.join(", "))]
    MissingRequiredFields {
        /// Names of the missing fields, as they appear on the command line.
        fields: Vec<String>,
    },

    /// The user cancelled an interactive prompt.
    #[error("prompt cancelled by user")]
    Cancelled,

    /// The terminal prompt failed for a reason other than cancellation.
    #[error("prompt failed: {message}")]
    Prompt {
        /// Description of the failure.
        message: String,
    },
}

impl Error {
    /// Returns true if this error represents a user cancellation.
    ///
    /// Cancellation is a normal way to leave the tool, not a failure.
    #[must_use]
    pub const fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
