//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "gopaths";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        let hint = match self.shell {
            Shell::Bash => Some(
                "gopaths completions bash > ~/.local/share/bash-completion/completions/gopaths",
            ),
            Shell::Zsh => Some("gopaths completions zsh > ~/.zsh/completions/_gopaths"),
            Shell::Fish => {
                Some("gopaths completions fish > ~/.config/fish/completions/gopaths.fish")
            }
            Shell::PowerShell => Some("gopaths completions powershell >> $PROFILE"),
            _ => None,
        };
        if let Some(hint) = hint {
            global.logger.info(&format!("Install with: {hint}"));
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
