#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # gopaths
//!
//! A library for deriving a GOPATH-style path list from marker files placed
//! in a directory tree.
//!
//! A marker file (`.go-path` by default, plus `.gocfg/gopaths`) lists
//! workspace entries, one per line, relative to the directory holding it.
//! Searching upward from one or more starting directories collects these
//! entries, appends the inherited `GOPATH`, and removes duplicates.
//!
//! ## Core Types
//!
//! - [`PathList`]: Ordered, `:`-delimited list of workspace entries
//! - [`SearchOptions`], [`Discovery`] and [`Outcome`]: Upward search
//! - [`Resolution`]: Merged result over several starting directories
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use gopaths::{find_above, Logger, SearchOptions};
//! use std::fs;
//!
//! let root = tempfile::tempdir().unwrap();
//! fs::write(root.path().join(".go-path"), "\n").unwrap();
//!
//! let options = SearchOptions { to_root: false, ..SearchOptions::default() };
//! let discovery = find_above(root.path(), &options, &Logger::default()).unwrap();
//! let paths = discovery.outcome.into_paths();
//! assert_eq!(paths.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod marker;
pub mod output;
pub mod path;
pub mod resolve;
pub mod walker;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, ResolvedConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter, ShellType};
pub use path::PathList;
pub use resolve::{resolve, Resolution};
pub use walker::{find_above, Discovery, HaltReason, Outcome, SearchOptions};
