//! In-memory implementation of the filesystem capabilities
//!
//! Listings come back in insertion order, which makes it possible to check
//! that the generator honours (or deliberately overrides) listing order.
//! Writes land back in the tree, so a second scan sees the index files the
//! first one produced.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Component, Path, PathBuf};

use super::{DirectoryLister, EntryKind, IndexWriter};

/// Upper bound on link hops while resolving a path, like `ELOOP`.
const MAX_LINK_HOPS: usize = 40;

#[derive(Debug, Clone)]
enum MemoryNode {
    Dir(Vec<String>),
    File(String),
    Symlink(PathBuf),
    Special,
}

/// A tree of directories and files held in memory.
#[derive(Debug)]
pub struct MemoryFs {
    root: PathBuf,
    nodes: RefCell<HashMap<PathBuf, MemoryNode>>,
    writes: RefCell<Vec<PathBuf>>,
    read_only: HashSet<PathBuf>,
}

impl MemoryFs {
    /// Create an empty tree rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut nodes = HashMap::new();
        nodes.insert(root.clone(), MemoryNode::Dir(Vec::new()));
        Self {
            root,
            nodes: RefCell::new(nodes),
            writes: RefCell::new(Vec::new()),
            read_only: HashSet::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Add a directory (and any missing parents) relative to the root.
    pub fn add_dir(&mut self, rel: &str) -> &mut Self {
        let path = self.root.join(rel);
        self.ensure_dir(&path);
        self
    }

    /// Add a file (and any missing parents) relative to the root.
    pub fn add_file(&mut self, rel: &str, contents: &str) -> &mut Self {
        let path = self.root.join(rel);
        self.insert(path, MemoryNode::File(contents.to_string()));
        self
    }

    /// Add an entry that is neither a file nor a directory (socket, fifo).
    pub fn add_special(&mut self, rel: &str) -> &mut Self {
        let path = self.root.join(rel);
        self.insert(path, MemoryNode::Special);
        self
    }

    /// Add a symlink at `rel` pointing at `target`, both relative to the root.
    pub fn add_symlink(&mut self, rel: &str, target: &str) -> &mut Self {
        let path = self.root.join(rel);
        let target = if target.is_empty() {
            self.root.clone()
        } else {
            self.root.join(target)
        };
        self.insert(path, MemoryNode::Symlink(target));
        self
    }

    /// Add a name that shows up in its parent's listing but cannot be
    /// stat'd, as if it vanished between listing and lookup.
    pub fn add_dangling(&mut self, rel: &str) -> &mut Self {
        let path = self.root.join(rel);
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            let parent = parent.to_path_buf();
            self.ensure_dir(&parent);
            if let Some(MemoryNode::Dir(children)) = self.nodes.get_mut().get_mut(&parent) {
                children.push(name.to_string_lossy().into_owned());
            }
        }
        self
    }

    /// Make writes into `rel` (a directory or file) fail with permission denied.
    pub fn deny_writes(&mut self, rel: &str) -> &mut Self {
        self.read_only.insert(self.root.join(rel));
        self
    }

    /// Contents of the file at `rel`, if it exists.
    pub fn read(&self, rel: &str) -> Option<String> {
        let path = self.resolve(&self.root.join(rel)).ok()?;
        match self.nodes.borrow().get(&path) {
            Some(MemoryNode::File(contents)) => Some(contents.clone()),
            _ => None,
        }
    }

    /// Every path passed to `write_index`, in call order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.borrow().clone()
    }

    fn ensure_dir(&mut self, path: &Path) {
        if self.nodes.get_mut().contains_key(path) {
            return;
        }
        self.insert(path.to_path_buf(), MemoryNode::Dir(Vec::new()));
    }

    fn insert(&mut self, path: PathBuf, node: MemoryNode) {
        let Some(parent) = path.parent().map(Path::to_path_buf) else {
            return;
        };
        if parent != path && parent.starts_with(&self.root) {
            self.ensure_dir(&parent);
        }
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let nodes = self.nodes.get_mut();
        if let Some(MemoryNode::Dir(children)) = nodes.get_mut(&parent) {
            if !children.contains(&name) {
                children.push(name);
            }
        }
        nodes.insert(path, node);
    }

    /// Resolve every symlink along `path`.
    fn resolve(&self, path: &Path) -> io::Result<PathBuf> {
        let nodes = self.nodes.borrow();
        let mut current = PathBuf::new();
        let mut hops = 0;
        for component in path.components() {
            match component {
                Component::ParentDir => {
                    current.pop();
                }
                Component::CurDir => {}
                other => current.push(other.as_os_str()),
            }
            while let Some(MemoryNode::Symlink(target)) = nodes.get(&current) {
                hops += 1;
                if hops > MAX_LINK_HOPS {
                    return Err(io::Error::other("too many levels of symbolic links"));
                }
                current = target.clone();
            }
        }
        Ok(current)
    }

    /// Resolve the parent of `path` but leave the final component alone.
    fn resolve_parent(&self, path: &Path) -> io::Result<PathBuf> {
        match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) => Ok(self.resolve(parent)?.join(name)),
            _ => Ok(path.to_path_buf()),
        }
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such file or directory: {}", path.display()),
        )
    }
}

impl DirectoryLister for MemoryFs {
    fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        let resolved = self.resolve(dir)?;
        match self.nodes.borrow().get(&resolved) {
            Some(MemoryNode::Dir(children)) => Ok(children.clone()),
            Some(_) => Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("not a directory: {}", dir.display()),
            )),
            None => Err(Self::not_found(dir)),
        }
    }

    fn entry_kind(&self, path: &Path, follow_symlinks: bool) -> io::Result<EntryKind> {
        let resolved = if follow_symlinks {
            self.resolve(path)?
        } else {
            self.resolve_parent(path)?
        };
        match self.nodes.borrow().get(&resolved) {
            Some(MemoryNode::Dir(_)) => Ok(EntryKind::Directory),
            Some(MemoryNode::File(_)) => Ok(EntryKind::File),
            Some(MemoryNode::Symlink(_)) | Some(MemoryNode::Special) => Ok(EntryKind::Unknown),
            None => Err(Self::not_found(path)),
        }
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        let resolved = self.resolve(path)?;
        if self.nodes.borrow().contains_key(&resolved) {
            Ok(resolved)
        } else {
            Err(Self::not_found(path))
        }
    }
}

impl IndexWriter for MemoryFs {
    fn write_index(&self, path: &Path, contents: &str) -> io::Result<()> {
        let resolved = self.resolve_parent(path)?;
        let parent = resolved
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| Self::not_found(path))?;
        if self.read_only.contains(&resolved) || self.read_only.contains(&parent) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ));
        }
        let name = resolved
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| Self::not_found(path))?;

        let mut nodes = self.nodes.borrow_mut();
        match nodes.get_mut(&parent) {
            Some(MemoryNode::Dir(children)) => {
                if !children.contains(&name) {
                    children.push(name);
                }
            }
            _ => return Err(Self::not_found(path)),
        }
        nodes.insert(resolved, MemoryNode::File(contents.to_string()));
        self.writes.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
