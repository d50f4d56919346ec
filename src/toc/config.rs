//! Configuration types for table of contents generation

/// File name of the generated index note in every directory.
///
/// Fixed: the wiki-links in parent indexes point at it and the walker
/// excludes it so a rescan never lists it.
pub const INDEX_FILE_NAME: &str = "1.Table of Contents.md";

/// Link target of an index file (its name without the `.md` extension).
pub const INDEX_FILE_STEM: &str = "1.Table of Contents";

/// Name given to the node of the directory the scan starts from.
pub const ROOT_NAME: &str = "root";

/// Entries whose name contains this are vault metadata, never content.
pub const DEFAULT_HIDDEN_MARKER: &str = ".obsidian";

/// Folder reserved for attachments, never indexed.
pub const DEFAULT_ATTACHMENTS_DIR: &str = "Attachments";

/// How symlinked entries are classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SymlinkPolicy {
    /// Symlinks are neither file nor directory and are left out.
    #[default]
    Skip,
    /// Classify by link target. Broken links abort the scan and links back to
    /// an ancestor directory are skipped.
    Follow,
}

/// Order in which the entries of a directory are processed and rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryOrder {
    /// Sort names byte-wise so output does not depend on the filesystem.
    #[default]
    Sorted,
    /// Keep whatever order the directory listing returned.
    Listing,
}

/// Configuration for a generator run.
#[derive(Debug, Clone)]
pub struct TocConfig {
    /// Substring marking hidden metadata entries.
    pub hidden_marker: String,
    /// Exact name of the attachments folder.
    pub attachments_dir: String,
    /// Extra glob patterns matched against entry names.
    pub ignore_patterns: Vec<String>,
    pub order: EntryOrder,
    pub symlinks: SymlinkPolicy,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            hidden_marker: DEFAULT_HIDDEN_MARKER.to_string(),
            attachments_dir: DEFAULT_ATTACHMENTS_DIR.to_string(),
            ignore_patterns: Vec::new(),
            order: EntryOrder::Sorted,
            symlinks: SymlinkPolicy::Skip,
        }
    }
}
