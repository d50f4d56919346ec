//! Dry-run preview of rendered index files

use std::io::{self, Write};
use std::path::PathBuf;

/// Write each `(path, contents)` pair under a `==> path <==` header.
pub fn write_preview<W: Write>(out: &mut W, files: &[(PathBuf, String)]) -> io::Result<()> {
    for (i, (path, contents)) in files.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "==> {} <==", path.display())?;
        writeln!(out, "{}", contents)?;
    }
    Ok(())
}

/// Print a dry-run preview to stdout.
pub fn print_preview(files: &[(PathBuf, String)]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_preview(&mut lock, files)
}
