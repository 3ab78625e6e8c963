//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user data directory under the home directory.
pub const DATA_DIR_NAME: &str = ".gopaths";

/// Name of the user configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A configuration file that was found and parsed.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use gopaths::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load_user_config(None).unwrap() {
///     println!("Loaded {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user configuration file.
    ///
    /// If `path` is given it is used as is, and must exist. Otherwise
    /// `~/.gopaths/config.yaml` is used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file does not exist, or if a
    /// file exists but cannot be read or parsed.
    pub fn load_user_config(path: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "configuration file does not exist".to_string(),
                    });
                }
                path.to_path_buf()
            }
            None => match Self::user_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(None),
            },
        };

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Default location of the user configuration file, if the home
    /// directory is known.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(DATA_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}
