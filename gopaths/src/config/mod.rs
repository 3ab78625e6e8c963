//! Configuration system for gopaths.
//!
//! Settings are layered with the following precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`GOPATHS_*`)
//! 3. User config (`~/.gopaths/config.yaml`, or an explicit file)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use gopaths::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("marker: {}", config.marker);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, ResolvedConfig, DEFAULT_ENV_KEY};
pub use validator::ConfigValidator;
