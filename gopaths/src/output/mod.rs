//! Output formatting for resolved path lists.
//!
//! The default format is the `:`-delimited list suitable for assigning to
//! GOPATH directly. Other formats list one entry per line, emit a JSON
//! array, or produce a shell-specific export statement.

mod formatters;
mod shell;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{PathList, Result};

pub(crate) use formatters::is_valid_env_var_name;
pub use formatters::{ExportFormatter, JsonFormatter, LinesFormatter, PathFormatter};
pub use shell::ShellType;

/// Trait for formatting path lists into different output formats.
pub trait OutputFormatter {
    /// Format the given path list into a string, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting fails (e.g., invalid environment
    /// variable names).
    fn format(&self, paths: &PathList) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `:`-delimited list.
    #[default]
    Path,
    /// One entry per line.
    Lines,
    /// JSON array.
    Json,
    /// Shell export statement.
    Export,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// `shell` and `var` are only used by [`OutputFormat::Export`].
    #[must_use]
    pub fn create_formatter(&self, shell: ShellType, var: &str) -> Box<dyn OutputFormatter> {
        match self {
            Self::Path => Box::new(PathFormatter),
            Self::Lines => Box::new(LinesFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Export => Box::new(ExportFormatter::new(shell, var)),
        }
    }
}
