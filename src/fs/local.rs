//! Local disk implementation of the filesystem capabilities

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::{DirectoryLister, EntryKind, IndexWriter};

/// Filesystem capabilities backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for LocalFs {
    fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                // Wiki-links are text; a name we cannot spell cannot be linked.
                Err(raw) => warn!(
                    "skipping non UTF-8 entry {:?} in {}",
                    raw,
                    dir.display()
                ),
            }
        }
        Ok(names)
    }

    fn entry_kind(&self, path: &Path, follow_symlinks: bool) -> io::Result<EntryKind> {
        let meta = if follow_symlinks {
            fs::metadata(path)?
        } else {
            fs::symlink_metadata(path)?
        };
        let file_type = meta.file_type();
        Ok(if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Unknown
        })
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        path.canonicalize()
    }
}

impl IndexWriter for LocalFs {
    fn write_index(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}
