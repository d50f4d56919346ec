//! Writer that collects index files instead of writing them

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use super::IndexWriter;

/// Collects every rendered index file in write order.
#[derive(Debug, Default)]
pub struct DryRunWriter {
    files: RefCell<Vec<(PathBuf, String)>>,
}

impl DryRunWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the collected `(path, contents)` pairs.
    pub fn into_files(self) -> Vec<(PathBuf, String)> {
        self.files.into_inner()
    }
}

impl IndexWriter for DryRunWriter {
    fn write_index(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.files
            .borrow_mut()
            .push((path.to_path_buf(), contents.to_string()));
        Ok(())
    }
}
