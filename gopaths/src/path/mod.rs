//! Path handling: lexical normalization and ordered path lists.
//!
//! # Normalization
//!
//! Entries read from marker files are made absolute against the directory
//! the marker lives in, and `.`/`..` are resolved textually. Symlinks are
//! preserved as spelled.
//!
//! ```
//! use gopaths::path::normalize::absolutize_in;
//! use std::path::{Path, PathBuf};
//!
//! let entry = absolutize_in(Path::new("/proj/src"), Path::new("../vendor")).unwrap();
//! assert_eq!(entry, PathBuf::from("/proj/vendor"));
//! ```
//!
//! # Path lists
//!
//! [`PathList`] keeps entries as an ordered sequence and only renders the
//! `:`-delimited form at the output boundary.

mod list;
pub mod normalize;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use list::{PathList, DELIMITER};
