//! Index file rendering
//!
//! Produces the markdown body of one directory's index file:
//!
//! ```text
//! # Folders
//! - [[A/1.Table of Contents|A]]
//! 	-[[A/x|x]]
//! # Files
//! - [[root]]
//! ```
//!
//! Subdirectory files are flattened one level deep under their folder's
//! bullet. The text never ends with a newline.

use std::path::{Path, PathBuf};

use super::config::{INDEX_FILE_NAME, INDEX_FILE_STEM};
use super::node::DirectoryNode;

const MARKDOWN_EXTENSION: &str = ".md";

/// Render the index file body for `node`.
pub fn render_index(node: &DirectoryNode) -> String {
    let mut output = String::new();

    output.push_str("# Folders\n");
    for dir in &node.subdirectories {
        output.push_str("- [[");
        output.push_str(&dir.name);
        output.push('/');
        output.push_str(INDEX_FILE_STEM);
        output.push('|');
        output.push_str(&dir.name);
        output.push_str("]]\n");
        render_sub_contents(dir, &mut output);
    }

    output.push_str("# Files\n");
    for file in &node.files {
        output.push_str("- [[");
        output.push_str(strip_markdown_extension(file));
        output.push_str("]]\n");
    }

    // Drop the final newline; the note ends on its last entry.
    output.pop();
    output
}

/// One level of flattening: `dir`'s own files, indented under its bullet.
fn render_sub_contents(dir: &DirectoryNode, output: &mut String) {
    for file in &dir.files {
        let stem = strip_markdown_extension(file);
        output.push_str("\t-[[");
        output.push_str(&dir.name);
        output.push('/');
        output.push_str(stem);
        output.push('|');
        output.push_str(stem);
        output.push_str("]]\n");
    }
}

/// Link target for a file: markdown notes are linked without `.md`,
/// anything else keeps its full name.
pub fn strip_markdown_extension(name: &str) -> &str {
    match name.strip_suffix(MARKDOWN_EXTENSION) {
        Some(stem) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Where the index file of `dir` lives.
pub fn index_path(dir: &Path) -> PathBuf {
    dir.join(INDEX_FILE_NAME)
}
