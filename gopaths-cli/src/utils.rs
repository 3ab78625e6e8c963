//! Utility functions for CLI operations.
//!
//! This module provides the options shared by all commands and the
//! configuration loading that layers command-line flags on top of the
//! library's configuration sources.

use crate::error::CliError;
use gopaths::{Config, ConfigBuilder, Logger, ResolvedConfig};
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Logger configured from `--verbose`, `--quiet` and `GOPATHS_LOG_MODE`.
    pub logger: Logger,

    /// Explicit configuration file.
    pub config_file: Option<PathBuf>,

    /// Values given on the command line, applied over every other layer.
    pub overrides: Config,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (highest priority)
/// 2. Environment variables
/// 3. Configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<ResolvedConfig, CliError> {
    let mut builder = ConfigBuilder::new().with_config(global.overrides.clone());
    if let Some(ref path) = global.config_file {
        builder = builder.with_config_file(path);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Starting directories, defaulting to the working directory.
pub fn start_dirs(dirs: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    if dirs.is_empty() {
        let cwd = env::current_dir().map_err(CliError::NoWorkingDirectory)?;
        Ok(vec![cwd])
    } else {
        Ok(dirs.to_vec())
    }
}
