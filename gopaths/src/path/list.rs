//! Ordered path lists and their `:`-delimited text form.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::logging::Logger;

/// Separator between entries in the text form of a path list.
pub const DELIMITER: char = ':';

/// An ordered list of path entries.
///
/// Entries are kept in insertion order and are never empty strings, so
/// appending an empty list or parsing `a::b` cannot produce doubled
/// delimiters. The `:`-joined text form is produced only by [`Display`]
/// (`to_string`).
///
/// [`Display`]: fmt::Display
///
/// # Examples
///
/// ```
/// use gopaths::PathList;
///
/// let mut list = PathList::parse("/a:/b");
/// list.extend(PathList::parse("/b::/c:"));
/// assert_eq!(list.to_string(), "/a:/b:/b:/c");
///
/// list.dedup();
/// assert_eq!(list.to_string(), "/a:/b:/c");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathList {
    entries: Vec<String>,
}

impl PathList {
    /// Create an empty path list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse the `:`-delimited text form, dropping empty segments.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        value.split(DELIMITER).collect()
    }

    /// Append `entry`. A value holding `:` is split into one entry per
    /// segment, and empty segments are ignored, so every stored entry is
    /// exactly one element of the rendered list.
    pub fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        if entry.contains(DELIMITER) {
            self.entries.extend(
                entry
                    .split(DELIMITER)
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string),
            );
        } else if !entry.is_empty() {
            self.entries.push(entry);
        }
    }

    /// Append every entry of `other`, keeping its order.
    pub fn extend(&mut self, other: PathList) {
        self.entries.extend(other.entries);
    }

    /// Remove repeated entries, keeping the first occurrence of each.
    pub fn dedup(&mut self) {
        self.dedup_logged(&Logger::default());
    }

    /// Like [`PathList::dedup`], reporting each dropped entry at debug level.
    pub fn dedup_logged(&mut self, logger: &Logger) {
        let mut seen = HashSet::with_capacity(self.entries.len());
        let mut index = 0usize;
        self.entries.retain(|entry| {
            let keep = seen.insert(entry.clone());
            if !keep {
                logger.debug(&format!("Dropping duplicate entry {index}: {entry}"));
            }
            index += 1;
            keep
        });
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    /// Borrow the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Consume the list, returning its entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

impl fmt::Display for PathList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "{DELIMITER}")?;
            }
            f.write_str(entry)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for PathList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for entry in iter {
            list.push(entry);
        }
        list
    }
}

impl IntoIterator for PathList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a PathList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
