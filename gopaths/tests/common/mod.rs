//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for laying out directory trees
//! with marker files.

use std::fs;
use std::path::{Path, PathBuf};

use gopaths::marker::{AUX_MARKER_DIR, AUX_MARKER_FILE, DEFAULT_MARKER};
use tempfile::TempDir;

/// A temporary directory tree holding marker files.
///
/// The tree is removed when the fixture is dropped.
pub struct MarkerTree {
    temp: TempDir,
}

#[allow(dead_code)]
impl MarkerTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            temp: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Root of the tree.
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Absolute path of `relative` inside the tree.
    pub fn path(&self, relative: &str) -> PathBuf {
        if relative.is_empty() {
            self.root().to_path_buf()
        } else {
            self.root().join(relative)
        }
    }

    /// Absolute path of `relative` as a path list entry.
    pub fn entry(&self, relative: &str) -> String {
        self.path(relative).to_str().expect("non UTF-8 temp dir").to_string()
    }

    /// Creates `relative` and its parents.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).expect("failed to create dir");
        path
    }

    /// Writes a primary `.go-path` marker into `relative`.
    pub fn marker(&self, relative: &str, contents: &str) -> &Self {
        self.named_marker(relative, DEFAULT_MARKER, contents)
    }

    /// Writes a primary marker with a custom file name into `relative`.
    pub fn named_marker(&self, relative: &str, name: &str, contents: &str) -> &Self {
        let dir = self.dir(relative);
        fs::write(dir.join(name), contents).expect("failed to write marker");
        self
    }

    /// Writes an auxiliary `.gocfg/gopaths` marker into `relative`.
    pub fn aux_marker(&self, relative: &str, contents: &str) -> &Self {
        let dir = self.dir(relative).join(AUX_MARKER_DIR);
        fs::create_dir_all(&dir).expect("failed to create aux dir");
        fs::write(dir.join(AUX_MARKER_FILE), contents).expect("failed to write aux marker");
        self
    }
}
