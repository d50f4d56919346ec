//! vault-toc - writes a table of contents note into every folder of a vault

pub mod error;
pub mod fs;
pub mod output;
pub mod toc;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TocError};
pub use fs::{DirectoryLister, DryRunWriter, EntryKind, IndexWriter, LocalFs, MemoryFs};
pub use output::{print_error, print_json, print_preview, print_summary};
pub use toc::{
    DirectoryNode, EntryOrder, INDEX_FILE_NAME, ScanReport, SymlinkPolicy, TocConfig, TocGenerator,
    render_index,
};
