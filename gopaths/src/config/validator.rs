//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::is_valid_env_var_name;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use gopaths::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// An empty marker or env key is allowed and disables that source.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref marker) = config.marker {
            Self::validate_marker(marker)?;
        }

        if let Some(ref key) = config.env_key {
            if !key.is_empty() {
                Self::validate_env_key(key)?;
            }
        }

        Ok(())
    }

    /// Marker names are joined onto each directory, so they must be a
    /// single path component.
    fn validate_marker(marker: &str) -> Result<()> {
        if marker.contains('/') {
            return Err(Error::Validation {
                field: "marker".into(),
                message: format!("'{marker}' must be a file name, not a path"),
            });
        }

        if marker == "." || marker == ".." {
            return Err(Error::Validation {
                field: "marker".into(),
                message: format!("'{marker}' does not name a file"),
            });
        }

        if marker.contains('\0') {
            return Err(Error::Validation {
                field: "marker".into(),
                message: "cannot contain null bytes".into(),
            });
        }

        Ok(())
    }

    fn validate_env_key(key: &str) -> Result<()> {
        if !is_valid_env_var_name(key) {
            return Err(Error::Validation {
                field: "env_key".into(),
                message: format!("'{key}' is not a valid environment variable name"),
            });
        }
        Ok(())
    }
}
