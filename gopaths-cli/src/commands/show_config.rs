//! Print the effective configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Parser;
use gopaths::config::ConfigLoader;

/// Print the configuration after files, environment and flags are applied
#[derive(Parser)]
pub struct ShowConfigCommand {}

impl ShowConfigCommand {
    /// Execute the show-config command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let source = global
            .config_file
            .clone()
            .or_else(ConfigLoader::user_config_path)
            .filter(|path| path.exists());
        match source {
            Some(path) => println!("# config file: {}", path.display()),
            None => println!("# config file: none"),
        }

        let yaml = serde_yaml::to_string(&config).map_err(|e| CliError::Config(e.to_string()))?;
        print!("{yaml}");

        Ok(())
    }
}
