//! Upward directory search for marker files.
//!
//! Starting from a directory, each level is checked for the primary marker
//! (`<dir>/<marker>`) and the auxiliary marker (`<dir>/.gocfg/gopaths`).
//! Both contribute when both exist, primary first. The walk then moves to
//! the parent directory unless one of these holds:
//!
//! - `to_root` is disabled ([`HaltReason::ToRootDisabled`]),
//! - the directory has no parent ([`HaltReason::ReachedRoot`]),
//! - a marker contained a `!` line ([`HaltReason::StopSentinel`]).
//!
//! # Examples
//!
//! ```no_run
//! use gopaths::walker::{find_above, Outcome, SearchOptions};
//! use gopaths::Logger;
//! use std::path::Path;
//!
//! let discovery = find_above(Path::new("."), &SearchOptions::default(), &Logger::default()).unwrap();
//! match discovery.outcome {
//!     Outcome::Found(paths) => println!("{paths}"),
//!     Outcome::NotFound => println!("no markers"),
//! }
//! ```

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::logging::Logger;
use crate::marker::{aux_marker_path, read_marker_file, MarkerRead, DEFAULT_MARKER};
use crate::path::normalize::{absolutize, is_root};
use crate::path::PathList;

/// Options controlling a single upward search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// File name of the primary marker. Empty disables the primary marker;
    /// the auxiliary marker is always checked.
    pub marker: String,
    /// Keep ascending after a directory has been examined.
    pub to_root: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            to_root: true,
        }
    }
}

/// What a search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// At least one entry was found.
    Found(PathList),
    /// No marker anywhere on the way up contributed an entry.
    NotFound,
}

impl Outcome {
    /// The entries found, or an empty list.
    #[must_use]
    pub fn into_paths(self) -> PathList {
        match self {
            Self::Found(paths) => paths,
            Self::NotFound => PathList::new(),
        }
    }
}

/// Why the search stopped ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// Only the starting directory was to be examined.
    ToRootDisabled,
    /// The filesystem root was examined.
    ReachedRoot,
    /// A marker asked to stop.
    StopSentinel,
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToRootDisabled => write!(f, "search to root disabled"),
            Self::ReachedRoot => write!(f, "reached root directory"),
            Self::StopSentinel => write!(f, "stop marker found"),
        }
    }
}

/// The result of a completed upward search.
///
/// The flags are reported even when nothing was found: a marker holding
/// only `-` still asks the caller to drop the environment entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// Entries found, in the order encountered from the start upward.
    pub outcome: Outcome,
    /// Some marker contained `!`.
    pub stop: bool,
    /// Some marker contained `-`.
    pub drop_env: bool,
    /// Why ascent ended.
    pub halt: HaltReason,
    /// The last directory examined.
    pub last_dir: PathBuf,
}

/// Search `start` and, depending on `options`, its ancestors for markers.
///
/// # Errors
///
/// Returns an error only if `start` cannot be made absolute. Unreadable
/// markers are skipped.
pub fn find_above(start: &Path, options: &SearchOptions, logger: &Logger) -> Result<Discovery> {
    let mut dir = absolutize(start)?;
    let mut acc = MarkerRead::default();

    let halt = loop {
        let scoped = logger.scoped(&dir.display().to_string());

        if !options.marker.is_empty() {
            let fpath = dir.join(&options.marker);
            scoped.debug(&format!("Looking for marker: {}", fpath.display()));
            if is_marker_candidate(&fpath) {
                scoped.debug(&format!("Reading marker: {}", fpath.display()));
                acc = accumulate(acc, &dir, &fpath, true, &scoped);
            }
        }

        let fpath = aux_marker_path(&dir);
        scoped.debug(&format!("Looking for auxiliary marker: {}", fpath.display()));
        if is_marker_candidate(&fpath) {
            scoped.debug(&format!("Reading auxiliary marker: {}", fpath.display()));
            acc = accumulate(acc, &dir, &fpath, false, &scoped);
        }

        if !options.to_root {
            break HaltReason::ToRootDisabled;
        }
        if is_root(&dir) || dir == Path::new(".") {
            break HaltReason::ReachedRoot;
        }
        if acc.stop {
            break HaltReason::StopSentinel;
        }

        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => break HaltReason::ReachedRoot,
        }
    };

    logger.debug(&format!("Search ended at {}: {halt}", dir.display()));

    let outcome = if acc.paths.is_empty() {
        Outcome::NotFound
    } else {
        Outcome::Found(acc.paths)
    };

    Ok(Discovery {
        outcome,
        stop: acc.stop,
        drop_env: acc.drop_env,
        halt,
        last_dir: dir,
    })
}

fn accumulate(
    acc: MarkerRead,
    dir: &Path,
    fpath: &Path,
    include_dir: bool,
    logger: &Logger,
) -> MarkerRead {
    let read = read_marker_file(dir, fpath, acc.paths, include_dir, logger);
    MarkerRead {
        paths: read.paths,
        stop: acc.stop || read.stop,
        drop_env: acc.drop_env || read.drop_env,
    }
}

/// Anything at `path` other than a directory counts as a marker. Only a
/// definite "not found" rules it out; other stat failures are left for the
/// reader to report.
fn is_marker_candidate(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => !meta.is_dir(),
        Err(e) => e.kind() != ErrorKind::NotFound,
    }
}
