//! Configuration builder for layered loading.

use std::path::PathBuf;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::{Config, ResolvedConfig};
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`ResolvedConfig`] from files, the environment and programmatic
/// overrides.
///
/// # Examples
///
/// ```
/// use gopaths::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { to_root: Some(false), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert!(!config.to_root);
/// assert_eq!(config.marker, ".go-path");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that loads the user config file and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load this file instead of `~/.gopaths/config.yaml`.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Do not load any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `GOPATHS_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other layer.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Load, merge and validate all layers.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be loaded, if an
    /// environment variable holds an invalid value, or if the merged
    /// configuration fails validation.
    pub fn build(self) -> Result<ResolvedConfig> {
        let mut sources = Vec::new();
        if !self.skip_files {
            if let Some(source) = ConfigLoader::load_user_config(self.config_file.as_deref())? {
                ConfigValidator::validate(&source.config)?;
                sources.push(source);
            }
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(ResolvedConfig::from(config))
    }
}
