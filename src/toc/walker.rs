//! TocGenerator - walks a directory tree and writes an index file per directory

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, TocError};
use crate::fs::{DirectoryLister, EntryKind, IndexWriter};

use super::classify::classify;
use super::config::{EntryOrder, ROOT_NAME, SymlinkPolicy, TocConfig};
use super::filter::ExclusionFilter;
use super::node::DirectoryNode;
use super::render::{index_path, render_index};

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// The scanned tree, rooted at a node named `root`.
    pub root: DirectoryNode,
    /// Index files in the order they were written (deepest first, root last).
    pub written: Vec<PathBuf>,
}

impl ScanReport {
    pub fn directories(&self) -> usize {
        self.root.total_directories()
    }

    pub fn files(&self) -> usize {
        self.root.total_files()
    }
}

/// Generates a table of contents file in every directory of a tree.
///
/// The walk is depth-first and strictly sequential: a directory's index file
/// is written as soon as its subtree is scanned, before the next sibling is
/// visited, and the root's index is written last.
pub struct TocGenerator {
    config: TocConfig,
    filter: ExclusionFilter,
}

impl TocGenerator {
    pub fn new(config: TocConfig) -> Self {
        let filter = ExclusionFilter::new(&config);
        Self { config, filter }
    }

    pub fn config(&self) -> &TocConfig {
        &self.config
    }

    /// Scan `root` and write an index file into it and every directory below.
    pub fn generate<L, W>(&self, root: &Path, lister: &L, writer: &W) -> Result<ScanReport>
    where
        L: DirectoryLister + ?Sized,
        W: IndexWriter + ?Sized,
    {
        let mut scan = Scan::new(self, root, lister, writer);
        let node = scan.walk_dir(Path::new(""))?;
        scan.write_index(Path::new(""), &node)?;

        Ok(ScanReport {
            root: node,
            written: scan.written,
        })
    }

    /// Walk `base/relative` and return its node.
    ///
    /// Index files of every directory below are written along the way; the
    /// index of `base/relative` itself is left to the caller. An empty
    /// `relative` walks `base` and names the node `root`.
    pub fn walk<L, W>(
        &self,
        base: &Path,
        relative: &Path,
        lister: &L,
        writer: &W,
    ) -> Result<DirectoryNode>
    where
        L: DirectoryLister + ?Sized,
        W: IndexWriter + ?Sized,
    {
        Scan::new(self, base, lister, writer).walk_dir(relative)
    }
}

impl Default for TocGenerator {
    fn default() -> Self {
        Self::new(TocConfig::default())
    }
}

/// State of one run: the capabilities plus the stack of directories being
/// walked (only tracked when following symlinks).
struct Scan<'a, L: ?Sized, W: ?Sized> {
    config: &'a TocConfig,
    filter: &'a ExclusionFilter,
    lister: &'a L,
    writer: &'a W,
    base: &'a Path,
    ancestors: Vec<PathBuf>,
    written: Vec<PathBuf>,
}

impl<'a, L, W> Scan<'a, L, W>
where
    L: DirectoryLister + ?Sized,
    W: IndexWriter + ?Sized,
{
    fn new(generator: &'a TocGenerator, base: &'a Path, lister: &'a L, writer: &'a W) -> Self {
        Self {
            config: &generator.config,
            filter: &generator.filter,
            lister,
            writer,
            base,
            ancestors: Vec::new(),
            written: Vec::new(),
        }
    }

    fn follow_symlinks(&self) -> bool {
        self.config.symlinks == SymlinkPolicy::Follow
    }

    fn full_path(&self, relative: &Path) -> PathBuf {
        if relative.as_os_str().is_empty() {
            self.base.to_path_buf()
        } else {
            self.base.join(relative)
        }
    }

    fn walk_dir(&mut self, relative: &Path) -> Result<DirectoryNode> {
        let dir_path = self.full_path(relative);
        let mut node = match relative.file_name() {
            Some(name) => DirectoryNode::new(name.to_string_lossy()),
            None => DirectoryNode::new(ROOT_NAME),
        };

        let mut entries = self
            .lister
            .list(&dir_path)
            .map_err(|e| TocError::lookup(&dir_path, e))?;
        if self.config.order == EntryOrder::Sorted {
            entries.sort();
        }

        if self.follow_symlinks() {
            let identity = self
                .lister
                .canonicalize(&dir_path)
                .map_err(|e| TocError::lookup(&dir_path, e))?;
            self.ancestors.push(identity);
        }

        for name in entries {
            if self.filter.is_excluded(&name) {
                debug!("excluded {}", dir_path.join(&name).display());
                continue;
            }

            let child = relative.join(&name);
            match classify(self.lister, self.base, &child, self.config.symlinks)? {
                EntryKind::Directory => {
                    if self.follow_symlinks() && self.is_ancestor(&child)? {
                        warn!(
                            "skipping {}: links back to a directory being scanned",
                            self.full_path(&child).display()
                        );
                        continue;
                    }
                    let sub = self.walk_dir(&child)?;
                    self.write_index(&child, &sub)?;
                    node.subdirectories.push(sub);
                }
                EntryKind::File => node.files.push(name),
                EntryKind::Unknown => {
                    debug!(
                        "skipping {}: not a file or directory",
                        self.full_path(&child).display()
                    );
                }
            }
        }

        if self.follow_symlinks() {
            self.ancestors.pop();
        }
        Ok(node)
    }

    fn is_ancestor(&self, relative: &Path) -> Result<bool> {
        let path = self.full_path(relative);
        let identity = self
            .lister
            .canonicalize(&path)
            .map_err(|e| TocError::lookup(&path, e))?;
        Ok(self.ancestors.contains(&identity))
    }

    fn write_index(&mut self, relative: &Path, node: &DirectoryNode) -> Result<()> {
        let path = index_path(&self.full_path(relative));
        let contents = render_index(node);
        self.writer
            .write_index(&path, &contents)
            .map_err(|e| TocError::write(&path, e))?;
        info!("wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}
