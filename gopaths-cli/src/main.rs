//! Main entry point for the gopaths CLI.
//!
//! Without a subcommand, prints the GOPATH derived from marker files above
//! the given directories. Subcommands:
//! - `completions`: Generate shell completion scripts
//! - `show-config`: Print the effective configuration

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use commands::ResolveCommand;
use gopaths::Config;
use utils::GlobalOptions;

/// Exit code for command-line usage errors.
const USAGE_EXIT_CODE: i32 = 4;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(USAGE_EXIT_CODE);
        }
        Err(e) => e.exit(),
    };

    let global = GlobalOptions {
        logger: gopaths::init_logger(cli.verbose, cli.quiet),
        config_file: cli.config,
        overrides: Config {
            marker: cli.marker,
            env_key: cli.env_key,
            to_root: cli.to_root,
            format: cli.format,
        },
    };

    let result = match cli.command {
        Some(Command::Completions(cmd)) => cmd.execute(&global),
        Some(Command::ShowConfig(cmd)) => cmd.execute(&global),
        None => ResolveCommand {
            dirs: cli.dirs,
            shell: cli.shell,
            newline: cli.newline,
        }
        .execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
