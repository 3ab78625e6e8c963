//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use gopaths::config::{Config, ConfigMerger};
///
/// let low = Config { marker: Some(".low".to_string()), ..Default::default() };
/// let high = Config { marker: Some(".high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.marker, Some(".high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target. Fields set in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.marker.is_some() {
            target.marker.clone_from(&source.marker);
        }

        if source.env_key.is_some() {
            target.env_key.clone_from(&source.env_key);
        }

        if source.to_root.is_some() {
            target.to_root = source.to_root;
        }

        if source.format.is_some() {
            target.format = source.format;
        }
    }
}
