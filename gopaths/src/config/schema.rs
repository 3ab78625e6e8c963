//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::marker::DEFAULT_MARKER;
use crate::output::OutputFormat;
use crate::walker::SearchOptions;

/// Default environment variable holding the inherited path list.
pub const DEFAULT_ENV_KEY: &str = "GOPATH";

/// Configuration as read from a file or the environment.
///
/// Every field is optional so that layers can be merged; see
/// [`ResolvedConfig`] for the fully defaulted form.
///
/// # Examples
///
/// ```
/// use gopaths::config::Config;
///
/// let config: Config = serde_yaml::from_str("marker: .workspace\nto_root: false\n").unwrap();
/// assert_eq!(config.marker.as_deref(), Some(".workspace"));
/// assert_eq!(config.to_root, Some(false));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File name of the primary marker. Empty disables it.
    pub marker: Option<String>,

    /// Environment variable to read inherited entries from. Empty disables it.
    pub env_key: Option<String>,

    /// Keep ascending after a directory has been examined.
    pub to_root: Option<bool>,

    /// Output format.
    pub format: Option<OutputFormat>,
}

/// Configuration with every default applied.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// File name of the primary marker.
    pub marker: String,
    /// Environment variable to read inherited entries from.
    pub env_key: String,
    /// Keep ascending after a directory has been examined.
    pub to_root: bool,
    /// Output format.
    pub format: OutputFormat,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            env_key: DEFAULT_ENV_KEY.to_string(),
            to_root: true,
            format: OutputFormat::default(),
        }
    }
}

impl From<Config> for ResolvedConfig {
    fn from(config: Config) -> Self {
        let defaults = Self::default();
        Self {
            marker: config.marker.unwrap_or(defaults.marker),
            env_key: config.env_key.unwrap_or(defaults.env_key),
            to_root: config.to_root.unwrap_or(defaults.to_root),
            format: config.format.unwrap_or(defaults.format),
        }
    }
}

impl ResolvedConfig {
    /// Options for the upward search.
    #[must_use]
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            marker: self.marker.clone(),
            to_root: self.to_root,
        }
    }

    /// The environment variable to read, or `None` when disabled.
    #[must_use]
    pub fn env_key(&self) -> Option<&str> {
        if self.env_key.is_empty() {
            None
        } else {
            Some(&self.env_key)
        }
    }
}
