//! Table of contents generation
//!
//! - `classify` - tells directories, files and everything else apart
//! - `filter` - exclusion predicate (metadata, attachments, the index itself)
//! - `walker` - depth-first walk that writes an index file per directory
//! - `render` - markdown body of one index file

mod classify;
mod config;
mod filter;
mod node;
mod render;
mod walker;

pub use classify::classify;
pub use config::{
    DEFAULT_ATTACHMENTS_DIR, DEFAULT_HIDDEN_MARKER, EntryOrder, INDEX_FILE_NAME, INDEX_FILE_STEM,
    ROOT_NAME, SymlinkPolicy, TocConfig,
};
pub use filter::ExclusionFilter;
pub use node::DirectoryNode;
pub use render::{index_path, render_index, strip_markdown_extension};
pub use walker::{ScanReport, TocGenerator};
