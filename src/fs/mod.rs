//! Filesystem capabilities consumed by the generator
//!
//! The generator never touches `std::fs` directly. It lists and classifies
//! entries through a [`DirectoryLister`] and emits index files through an
//! [`IndexWriter`], so the same walk runs against:
//!
//! - `LocalFs`: the real disk
//! - `MemoryFs`: an in-memory tree (tests, virtual vaults)
//! - `DryRunWriter`: a writer that keeps rendered files instead of writing them

mod dry_run;
mod local;
mod memory;

use std::io;
use std::path::{Path, PathBuf};

pub use dry_run::DryRunWriter;
pub use local::LocalFs;
pub use memory::MemoryFs;

/// What a directory entry turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Anything else: symlinks (unless followed), sockets, fifos, devices.
    Unknown,
}

/// Read-side capability: list directories and stat entries.
pub trait DirectoryLister {
    /// Names of the immediate entries of `dir`, in the order the backing
    /// store returns them.
    fn list(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Classify `path`. With `follow_symlinks` the link target is inspected,
    /// otherwise a symlink is reported as [`EntryKind::Unknown`].
    fn entry_kind(&self, path: &Path, follow_symlinks: bool) -> io::Result<EntryKind>;

    /// Resolve `path` to a stable identity, used to detect symlink cycles.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        Ok(path.to_path_buf())
    }
}

/// Write-side capability: create or overwrite an index file.
pub trait IndexWriter {
    fn write_index(&self, path: &Path, contents: &str) -> io::Result<()>;
}
