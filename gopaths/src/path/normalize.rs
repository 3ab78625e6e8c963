//! Lexical path normalization.
//!
//! Paths are made absolute by joining them onto a base directory and then
//! resolving `.` and `..` components textually. Symlinks are never followed,
//! so a marker that names `../lib` always yields the sibling of the marker's
//! directory as spelled, whether or not it exists.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve `.` and `..` components without touching the filesystem.
///
/// For rooted paths a `..` at the root is dropped, so `/..` is `/`. Relative
/// paths keep leading `..` components they cannot cancel. An empty result
/// becomes `.`.
///
/// # Examples
///
/// ```
/// use gopaths::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(resolve_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(resolve_components(Path::new("/a/../..")), PathBuf::from("/"));
/// assert_eq!(resolve_components(Path::new("../x/./y")), PathBuf::from("../x/y"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut has_root = false;
    // Normal components pushed since the root (or since the start).
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                } else if has_root {
                    log::debug!("ignoring '..' above the root in {}", path.display());
                } else {
                    result.push("..");
                }
            }
        }
    }

    if result.as_os_str().is_empty() {
        result.push(".");
    }

    result
}

/// Make `path` absolute relative to `base`, then resolve its components.
///
/// Absolute paths ignore `base`. A relative `base` is itself made absolute
/// against the working directory first.
///
/// # Errors
///
/// Returns [`Error::WorkingDirectory`] if a relative result has to be
/// anchored and the working directory cannot be determined.
///
/// # Examples
///
/// ```
/// use gopaths::path::normalize::absolutize_in;
/// use std::path::{Path, PathBuf};
///
/// let lib = absolutize_in(Path::new("/proj"), Path::new("../lib")).unwrap();
/// assert_eq!(lib, PathBuf::from("/lib"));
///
/// let abs = absolutize_in(Path::new("/proj"), Path::new("/opt/go")).unwrap();
/// assert_eq!(abs, PathBuf::from("/opt/go"));
/// ```
pub fn absolutize_in(base: &Path, path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(resolve_components(path));
    }
    absolutize(&base.join(path))
}

/// Make `path` absolute relative to the working directory, then resolve its
/// components.
///
/// # Errors
///
/// Returns [`Error::WorkingDirectory`] if `path` is relative and the working
/// directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use gopaths::path::normalize::absolutize;
/// use std::path::Path;
///
/// let here = absolutize(Path::new(".")).unwrap();
/// assert!(here.is_absolute());
/// ```
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(resolve_components(path));
    }
    let cwd = env::current_dir().map_err(Error::WorkingDirectory)?;
    Ok(resolve_components(&cwd.join(path)))
}

/// Convert a normalized path into a path-list entry.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the path is not valid UTF-8, since the
/// path list is emitted as text.
pub fn to_entry(path: &Path) -> Result<String> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "path contains invalid UTF-8".to_string(),
        })
}

/// Whether `dir` has no parent to ascend to.
///
/// # Examples
///
/// ```
/// use gopaths::path::normalize::is_root;
/// use std::path::Path;
///
/// assert!(is_root(Path::new("/")));
/// assert!(!is_root(Path::new("/usr")));
/// ```
#[must_use]
pub fn is_root(dir: &Path) -> bool {
    dir.parent().is_none()
}
