//! Output formatter implementations.

use crate::{Error, PathList, Result};

use super::{OutputFormatter, ShellType};

/// Validates that a string is a valid environment variable name.
///
/// Valid names must:
/// - Start with a letter or underscore
/// - Contain only letters, digits, and underscores
pub(crate) fn is_valid_env_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The `:`-delimited path list, as stored in GOPATH.
pub struct PathFormatter;

impl OutputFormatter for PathFormatter {
    fn format(&self, paths: &PathList) -> Result<String> {
        Ok(paths.to_string())
    }
}

/// One entry per line.
pub struct LinesFormatter;

impl OutputFormatter for LinesFormatter {
    fn format(&self, paths: &PathList) -> Result<String> {
        Ok(paths
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// A JSON array of entries.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, paths: &PathList) -> Result<String> {
        serde_json::to_string(paths).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// A shell statement assigning the path list to a variable.
pub struct ExportFormatter {
    shell: ShellType,
    var: String,
}

impl ExportFormatter {
    /// Create a new export formatter assigning to `var` in `shell` syntax.
    #[must_use]
    pub fn new(shell: ShellType, var: impl Into<String>) -> Self {
        Self {
            shell,
            var: var.into(),
        }
    }
}

impl OutputFormatter for ExportFormatter {
    fn format(&self, paths: &PathList) -> Result<String> {
        if !is_valid_env_var_name(&self.var) {
            return Err(Error::Validation {
                field: "environment_variable".to_string(),
                message: format!(
                    "invalid environment variable name '{}': must contain only alphanumeric characters and underscores, and start with a letter or underscore",
                    self.var
                ),
            });
        }
        Ok(self.shell.format_export(&self.var, &paths.to_string()))
    }
}
