//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `GOPATHS_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use std::env;

/// Overrides the primary marker file name.
pub const ENV_MARKER: &str = "GOPATHS_MARKER";
/// Overrides the variable the inherited path list is read from.
pub const ENV_ENV_KEY: &str = "GOPATHS_ENV";
/// Overrides whether the search continues to the root.
pub const ENV_TO_ROOT: &str = "GOPATHS_TO_ROOT";
/// Overrides the output format.
pub const ENV_FORMAT: &str = "GOPATHS_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use gopaths::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., an unrecognized boolean or output format).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(marker) = env::var(ENV_MARKER) {
            config.marker = Some(marker);
        }

        if let Ok(key) = env::var(ENV_ENV_KEY) {
            config.env_key = Some(key);
        }

        if let Ok(val) = env::var(ENV_TO_ROOT) {
            config.to_root = Some(Self::parse_bool(ENV_TO_ROOT, &val)?);
        }

        if let Ok(val) = env::var(ENV_FORMAT) {
            config.format = Some(Self::parse_format(ENV_FORMAT, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    pub(crate) fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    fn parse_format(field: &str, s: &str) -> Result<OutputFormat> {
        match s.to_lowercase().as_str() {
            "path" => Ok(OutputFormat::Path),
            "lines" => Ok(OutputFormat::Lines),
            "json" => Ok(OutputFormat::Json),
            "export" => Ok(OutputFormat::Export),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid output format: '{s}' (expected path/lines/json/export)"),
            }),
        }
    }
}
