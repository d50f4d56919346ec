//! JSON output formatting

use std::io;

use crate::toc::DirectoryNode;

/// Print the scanned tree as pretty-printed JSON to stdout.
pub fn print_json(node: &DirectoryNode) -> io::Result<()> {
    let json = serde_json::to_string_pretty(node).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
