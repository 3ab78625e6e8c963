//! Marker file parsing.
//!
//! A marker file lists path entries one per line. Besides paths it may
//! contain:
//!
//! - blank lines and `#` comments, which are ignored,
//! - a line that is exactly `-`, asking the caller to drop the entries it
//!   inherited from the environment,
//! - a line that is exactly `!`, asking the walk to stop ascending.
//!
//! Relative entries are resolved against the directory holding the marker.
//! An empty primary marker stands for its own directory; an empty auxiliary
//! marker contributes nothing.
//!
//! # Examples
//!
//! ```
//! use gopaths::marker::parse_marker;
//! use gopaths::Logger;
//! use std::path::Path;
//!
//! let read = parse_marker(b"# deps\n../lib\n!\n", Path::new("/proj/src"), true, &Logger::default());
//! assert_eq!(read.paths.to_string(), "/proj/lib");
//! assert!(read.stop);
//! assert!(!read.drop_env);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::logging::Logger;
use crate::path::normalize::{absolutize_in, to_entry};
use crate::path::PathList;

/// Default file name of the primary marker.
pub const DEFAULT_MARKER: &str = ".go-path";

/// Directory holding the auxiliary marker, relative to each searched directory.
pub const AUX_MARKER_DIR: &str = ".gocfg";

/// File name of the auxiliary marker inside [`AUX_MARKER_DIR`].
pub const AUX_MARKER_FILE: &str = "gopaths";

const DROP_SENTINEL: &str = "-";
const STOP_SENTINEL: &str = "!";

/// Location of the auxiliary marker for `dir`.
///
/// # Examples
///
/// ```
/// use gopaths::marker::aux_marker_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(aux_marker_path(Path::new("/proj")), PathBuf::from("/proj/.gocfg/gopaths"));
/// ```
#[must_use]
pub fn aux_marker_path(dir: &Path) -> PathBuf {
    dir.join(AUX_MARKER_DIR).join(AUX_MARKER_FILE)
}

/// Result of reading one marker file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerRead {
    /// The accumulated path list, with this marker's entries appended.
    pub paths: PathList,
    /// A `!` line was seen.
    pub stop: bool,
    /// A `-` line was seen.
    pub drop_env: bool,
}

/// Read the marker at `path` (living in `dir`) and append its entries to
/// `accumulated`.
///
/// A marker that cannot be read leaves `accumulated` untouched and sets no
/// flags; the failure is logged at debug level.
pub fn read_marker_file(
    dir: &Path,
    path: &Path,
    accumulated: PathList,
    include_dir: bool,
    logger: &Logger,
) -> MarkerRead {
    let logger = logger.scoped(&path.display().to_string());

    let contents = match fs::read(path) {
        Ok(contents) => contents,
        Err(e) => {
            logger.debug(&format!("Error reading {}: {e}", path.display()));
            return MarkerRead {
                paths: accumulated,
                ..MarkerRead::default()
            };
        }
    };

    let found = parse_marker(&contents, dir, include_dir, &logger);
    let mut paths = accumulated;
    paths.extend(found.paths);
    logger.debug(&format!(
        "{paths} (stop={} drop={})",
        found.stop, found.drop_env
    ));

    MarkerRead {
        paths,
        stop: found.stop,
        drop_env: found.drop_env,
    }
}

/// Parse marker `contents` found in `dir`.
///
/// The returned list holds only this marker's entries. Lines that cannot be
/// turned into a path (invalid UTF-8, for instance) are skipped without
/// affecting the rest of the file.
#[must_use]
pub fn parse_marker(contents: &[u8], dir: &Path, include_dir: bool, logger: &Logger) -> MarkerRead {
    let mut read = MarkerRead::default();

    let lines = split_lines(contents);
    let lines = if lines.len() == 1 && lines[0].is_empty() {
        if !include_dir {
            return read;
        }
        vec![dir.as_os_str().as_encoded_bytes().to_vec()]
    } else {
        lines
    };

    for raw in &lines {
        if raw.is_empty() || raw[0] == b'#' {
            continue;
        }

        let Ok(line) = std::str::from_utf8(raw) else {
            logger.debug(&format!(
                "Skipping line that is not valid UTF-8: {}",
                String::from_utf8_lossy(raw)
            ));
            continue;
        };

        match line {
            DROP_SENTINEL => {
                logger.debug("Dropping environment path entries");
                read.drop_env = true;
            }
            STOP_SENTINEL => {
                logger.debug("Stopping directory search");
                read.stop = true;
            }
            _ => match absolutize_in(dir, Path::new(line)).and_then(|p| to_entry(&p)) {
                Ok(entry) => {
                    logger.debug(&format!("Keeping {entry}"));
                    read.paths.push(entry);
                }
                Err(e) => logger.debug(&format!("Error getting path for {line:?}: {e}")),
            },
        }
    }

    read
}

/// Strip carriage returns, trim surrounding newlines and split into lines.
///
/// Always yields at least one (possibly empty) line.
fn split_lines(contents: &[u8]) -> Vec<Vec<u8>> {
    let stripped: Vec<u8> = contents.iter().copied().filter(|&b| b != b'\r').collect();

    let start = stripped
        .iter()
        .position(|&b| b != b'\n')
        .unwrap_or(stripped.len());
    let end = stripped
        .iter()
        .rposition(|&b| b != b'\n')
        .map_or(start, |i| i + 1);

    stripped[start..end]
        .split(|&b| b == b'\n')
        .map(<[u8]>::to_vec)
        .collect()
}
