//! The default command: resolve starting directories into a path list.

use crate::error::CliError;
use crate::utils::{load_configuration, start_dirs, GlobalOptions};
use gopaths::config::DEFAULT_ENV_KEY;
use gopaths::{resolve, ShellType};
use std::env;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

/// Resolve directories and print the merged path list.
pub struct ResolveCommand {
    /// Starting directories; empty means the working directory.
    pub dirs: Vec<PathBuf>,

    /// Shell syntax for the export format.
    pub shell: Option<ShellType>,

    /// Trailing newline override.
    pub newline: Option<bool>,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = &global.logger;
        let config = load_configuration(global)?;
        let dirs = start_dirs(&self.dirs)?;

        let env_value = config.env_key().and_then(|key| env::var(key).ok());
        let resolution = resolve(&dirs, env_value.as_deref(), &config.search_options(), logger)?;

        if let Some(ref err) = resolution.aborted {
            logger.warn(&format!("Printing partial result after error: {err}"));
        }

        let shell = self.shell.unwrap_or_else(ShellType::detect);
        let var = config.env_key().unwrap_or(DEFAULT_ENV_KEY);
        let output = config
            .format
            .create_formatter(shell, var)
            .format(&resolution.paths)?;

        let newline = self.newline.unwrap_or_else(|| io::stdout().is_terminal());

        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        if newline {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;

        Ok(())
    }
}
