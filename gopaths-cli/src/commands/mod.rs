//! CLI command implementations.
//!
//! - `resolve`: Print the path list for the starting directories (default)
//! - `completions`: Generate shell completion scripts
//! - `show_config`: Print the effective configuration

pub mod completions;
pub mod resolve;
pub mod show_config;

pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
pub use show_config::ShowConfigCommand;
