//! Scanned directory tree

use serde::Serialize;

use super::config::ROOT_NAME;

/// One scanned directory: its child directories and its files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryNode {
    pub name: String,
    pub subdirectories: Vec<DirectoryNode>,
    pub files: Vec<String>,
}

impl DirectoryNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subdirectories: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn root() -> Self {
        Self::new(ROOT_NAME)
    }

    /// Number of directories below this one, at any depth.
    pub fn total_directories(&self) -> usize {
        self.subdirectories
            .iter()
            .map(|d| 1 + d.total_directories())
            .sum()
    }

    /// Number of files in this directory and every directory below it.
    pub fn total_files(&self) -> usize {
        self.files.len()
            + self
                .subdirectories
                .iter()
                .map(DirectoryNode::total_files)
                .sum::<usize>()
    }
}
