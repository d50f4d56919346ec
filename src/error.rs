//! Error types for table of contents generation

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort a scan.
///
/// Neither variant is recovered locally: the first failure stops the walk and
/// index files written before it are left as they are.
#[derive(Error, Debug)]
pub enum TocError {
    /// A path could not be listed or stat'd.
    #[error("cannot access '{}': {source}", .path.display())]
    Lookup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An index file could not be written.
    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TocError {
    pub fn lookup(path: &Path, source: io::Error) -> Self {
        Self::Lookup {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path the failing operation was addressed to.
    pub fn path(&self) -> &Path {
        match self {
            TocError::Lookup { path, .. } => path,
            TocError::Write { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, TocError>;
