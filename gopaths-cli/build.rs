//! Build script for gopaths-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("gopaths")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Derive a GOPATH from marker files")
        .long_about(
            "Search each DIR (default: the working directory) and its ancestors for \
             .go-path and .gocfg/gopaths marker files, and print the combined, \
             deduplicated path list followed by the inherited GOPATH.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Use this configuration file instead of ~/.gopaths/config.yaml")
                .value_name("PATH")
                .global(true)
                .env("GOPATHS_CONFIG"),
        )
        .arg(
            Arg::new("marker")
                .long("marker")
                .help("Primary marker file name (empty disables it)")
                .value_name("NAME")
                .global(true),
        )
        .arg(
            Arg::new("env")
                .long("env")
                .help("Variable holding the inherited path list (empty disables it)")
                .value_name("VAR")
                .global(true),
        )
        .arg(
            Arg::new("to-root")
                .long("to-root")
                .help("Keep ascending to the filesystem root")
                .value_name("BOOL")
                .global(true)
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["path", "lines", "json", "export"])
                .global(true),
        )
        .arg(
            Arg::new("shell")
                .long("shell")
                .help("Shell syntax for the export format (default: detected)")
                .value_parser(["bash", "zsh", "fish", "powershell"]),
        )
        .arg(
            Arg::new("newline")
                .long("newline")
                .help("Print a trailing newline (default: only when stdout is a terminal)")
                .value_name("BOOL")
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true"),
        )
        .arg(
            Arg::new("dirs")
                .value_name("DIR")
                .help("Starting directories")
                .action(ArgAction::Append),
        )
        .subcommands(vec![
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
            Command::new("show-config")
                .about("Print the effective configuration")
                .long_about(
                    "Print the configuration after files, environment and flags are applied",
                ),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("gopaths.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
