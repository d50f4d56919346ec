//! Test utilities for creating temporary vaults on disk.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::toc::INDEX_FILE_NAME;

/// A temporary vault directory for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestVault {
    dir: TempDir,
}

impl TestVault {
    /// Create a new empty vault.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the vault root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Path of the index file inside `dir` ("" for the root).
    pub fn index_path(&self, dir: &str) -> PathBuf {
        self.dir.path().join(dir).join(INDEX_FILE_NAME)
    }

    /// Read the index file inside `dir` ("" for the root).
    pub fn read_index(&self, dir: &str) -> String {
        fs::read_to_string(self.index_path(dir)).expect("Failed to read index file")
    }

    /// Whether `dir` has an index file.
    pub fn has_index(&self, dir: &str) -> bool {
        self.index_path(dir).is_file()
    }
}

impl Default for TestVault {
    fn default() -> Self {
        Self::new()
    }
}
