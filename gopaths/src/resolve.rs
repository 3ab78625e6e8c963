//! Resolution of a complete path list from several starting directories.
//!
//! Each starting directory is searched with [`find_above`]. Results are
//! concatenated in argument order, the environment-provided list is appended
//! unless some marker asked for it to be dropped, and duplicates are removed
//! keeping the first occurrence.
//!
//! Processing of further starting directories ends early when:
//!
//! - a search fails fatally (its error is kept in
//!   [`Resolution::aborted`] and earlier results are kept), or
//! - a search saw a `!` marker line.
//!
//! # Examples
//!
//! ```no_run
//! use gopaths::resolve::resolve;
//! use gopaths::walker::SearchOptions;
//! use gopaths::Logger;
//!
//! let resolution = resolve(&["."], Some("/usr/local/go"), &SearchOptions::default(), &Logger::default()).unwrap();
//! println!("{}", resolution.paths);
//! ```

use std::path::Path;

use crate::error::{Error, Result};
use crate::logging::Logger;
use crate::path::PathList;
use crate::walker::{find_above, Outcome, SearchOptions};

/// The merged result of resolving all starting directories.
#[derive(Debug)]
pub struct Resolution {
    /// Deduplicated entries, directory results first, then the environment.
    pub paths: PathList,
    /// Some marker contained `-`, so the environment list was left out.
    pub env_dropped: bool,
    /// Some marker contained `!`, so later starting directories were skipped.
    pub stopped: bool,
    /// The fatal error that ended processing early, if any.
    pub aborted: Option<Error>,
}

/// Resolve `dirs` in order and merge their results with `env_value`.
///
/// `env_value` is the `:`-delimited list inherited from the environment, if
/// any.
///
/// # Errors
///
/// Returns [`Error::NoStartDirectories`] if `dirs` is empty. Failures of
/// individual searches do not fail the resolution; see
/// [`Resolution::aborted`].
pub fn resolve<P: AsRef<Path>>(
    dirs: &[P],
    env_value: Option<&str>,
    options: &SearchOptions,
    logger: &Logger,
) -> Result<Resolution> {
    if dirs.is_empty() {
        return Err(Error::NoStartDirectories);
    }

    let mut paths = PathList::new();
    let mut keep_env = true;
    let mut stopped = false;
    let mut aborted = None;

    for dir in dirs {
        let dir = dir.as_ref();
        let discovery = match find_above(dir, options, logger) {
            Ok(discovery) => discovery,
            Err(e) => {
                logger.error(&format!("{}: {e}", dir.display()));
                aborted = Some(e);
                break;
            }
        };

        if discovery.drop_env {
            keep_env = false;
        }

        match discovery.outcome {
            Outcome::Found(found) => {
                logger.debug(&format!("Appending pathset {found}"));
                paths.extend(found);
            }
            Outcome::NotFound => {
                logger.debug(&format!("No markers found above {}", dir.display()));
            }
        }

        if discovery.stop {
            logger.debug("Ending search");
            stopped = true;
            break;
        }
    }

    if keep_env {
        if let Some(value) = env_value {
            logger.debug(&format!("Appending environment pathset {value}"));
            paths.extend(PathList::parse(value));
        }
    } else {
        logger.debug("Environment pathset dropped");
    }

    logger.debug(&format!("Filtering unique paths: {paths}"));
    paths.dedup_logged(logger);

    Ok(Resolution {
        paths,
        env_dropped: !keep_env,
        stopped,
        aborted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::DEFAULT_MARKER;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn options() -> SearchOptions {
        SearchOptions {
            to_root: false,
            ..SearchOptions::default()
        }
    }

    fn project(root: &Path, name: &str, marker: &str) -> PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(DEFAULT_MARKER), marker).unwrap();
        dir
    }

    #[test]
    fn test_no_dirs_is_an_error() {
        let dirs: [&str; 0] = [];
        let result = resolve(&dirs, None, &options(), &Logger::default());
        assert!(matches!(result, Err(Error::NoStartDirectories)));
    }

    #[test]
    fn test_merges_dedups_and_appends_env() {
        let temp_dir = TempDir::new().unwrap();
        let first = project(temp_dir.path(), "first", "/a\n/b\n");
        let second = project(temp_dir.path(), "second", "/b\n/c\n");

        let resolution =
            resolve(&[first, second], Some("/env"), &options(), &Logger::default()).unwrap();
        assert_eq!(resolution.paths.to_string(), "/a:/b:/c:/env");
        assert!(!resolution.env_dropped);
        assert!(resolution.aborted.is_none());
    }

    #[test]
    fn test_drop_in_any_directory_omits_env() {
        let temp_dir = TempDir::new().unwrap();
        let first = project(temp_dir.path(), "first", "/a\n");
        let second = project(temp_dir.path(), "second", "-\n");

        let resolution =
            resolve(&[first, second], Some("/env"), &options(), &Logger::default()).unwrap();
        assert_eq!(resolution.paths.to_string(), "/a");
        assert!(resolution.env_dropped);
    }

    #[test]
    fn test_not_found_directory_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let empty = temp_dir.path().join("empty");
        fs::create_dir(&empty).unwrap();
        let found = project(temp_dir.path(), "found", "/a\n");

        let resolution =
            resolve(&[empty, found], None, &options(), &Logger::default()).unwrap();
        assert_eq!(resolution.paths.to_string(), "/a");
    }

    #[test]
    fn test_stop_skips_later_directories() {
        let temp_dir = TempDir::new().unwrap();
        let first = project(temp_dir.path(), "first", "!\n/a\n");
        let second = project(temp_dir.path(), "second", "/b\n");

        let resolution =
            resolve(&[first, second], Some("/env"), &options(), &Logger::default()).unwrap();
        assert_eq!(resolution.paths.to_string(), "/a:/env");
        assert!(resolution.stopped);
    }

    #[test]
    fn test_env_entries_are_deduplicated_against_markers() {
        let temp_dir = TempDir::new().unwrap();
        let first = project(temp_dir.path(), "first", "/a\n");

        let resolution =
            resolve(&[first], Some("/env::/a:"), &options(), &Logger::default()).unwrap();
        assert_eq!(resolution.paths.to_string(), "/a:/env");
    }

    #[test]
    fn test_delimited_marker_line_is_deduplicated_per_element() {
        let temp_dir = TempDir::new().unwrap();
        let first = project(temp_dir.path(), "first", "/x:/y\n");

        let resolution =
            resolve(&[first], Some("/y:/x"), &options(), &Logger::default()).unwrap();
        assert_eq!(resolution.paths.as_slice(), ["/x", "/y"]);
        assert_eq!(resolution.paths.to_string(), "/x:/y");
    }

    #[test]
    fn test_nothing_found_yields_env_only() {
        let temp_dir = TempDir::new().unwrap();
        let resolution = resolve(
            &[temp_dir.path()],
            Some("/home/go"),
            &options(),
            &Logger::default(),
        )
        .unwrap();
        assert_eq!(resolution.paths.to_string(), "/home/go");
    }
}
