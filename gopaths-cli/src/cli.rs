//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros.
//! Without a subcommand, the positional directories are resolved and the
//! resulting path list is printed.

use crate::commands::{CompletionsCommand, ShowConfigCommand};
use clap::{Parser, Subcommand};
use gopaths::{OutputFormat, ShellType};
use std::path::PathBuf;

/// Derive a GOPATH-style path list from marker files.
#[derive(Parser)]
#[command(name = "gopaths")]
#[command(
    version,
    about = "Derive a GOPATH from marker files",
    long_about = "Search each DIR (default: the working directory) and its ancestors for \
                  .go-path and .gocfg/gopaths marker files, and print the combined, \
                  deduplicated path list followed by the inherited GOPATH."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use this configuration file instead of ~/.gopaths/config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "GOPATHS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Primary marker file name (empty disables it)
    #[arg(long, value_name = "NAME", global = true)]
    pub marker: Option<String>,

    /// Variable holding the inherited path list (empty disables it)
    #[arg(long = "env", value_name = "VAR", global = true)]
    pub env_key: Option<String>,

    /// Keep ascending to the filesystem root
    #[arg(
        long,
        value_name = "BOOL",
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub to_root: Option<bool>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Shell syntax for the export format (default: detected)
    #[arg(long, value_enum)]
    pub shell: Option<ShellType>,

    /// Print a trailing newline (default: only when stdout is a terminal)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub newline: Option<bool>,

    /// Starting directories
    #[arg(value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate shell completion scripts
    Completions(CompletionsCommand),

    /// Print the effective configuration
    ShowConfig(ShowConfigCommand),
}
