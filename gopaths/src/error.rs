//! Error types for the gopaths library.
//!
//! Only conditions that the caller has to act on are represented here.
//! Unreadable marker files and unusable marker lines are logged and skipped
//! by the reader, and "no marker anywhere above this directory" is reported
//! through [`crate::walker::Outcome::NotFound`] rather than as an error.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a gopaths error.
///
/// # Examples
///
/// ```
/// use gopaths::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/home/user/go".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the gopaths library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The current working directory could not be determined.
    #[error("cannot determine working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Resolution was requested without any starting directory.
    #[error("no starting directories given")]
    NoStartDirectories,
}
