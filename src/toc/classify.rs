//! Entry classification

use std::path::Path;

use crate::error::{Result, TocError};
use crate::fs::{DirectoryLister, EntryKind};

use super::config::SymlinkPolicy;

/// Classify `base/relative` as a directory, a regular file or neither.
///
/// A failed lookup (including an entry that vanished since it was listed) is
/// returned as [`TocError::Lookup`] rather than treated as `Unknown`.
pub fn classify<L: DirectoryLister + ?Sized>(
    lister: &L,
    base: &Path,
    relative: &Path,
    symlinks: SymlinkPolicy,
) -> Result<EntryKind> {
    let path = base.join(relative);
    lister
        .entry_kind(&path, symlinks == SymlinkPolicy::Follow)
        .map_err(|e| TocError::lookup(&path, e))
}
