//! Console output for the CLI
//!
//! - `summary` - status line after a run (and error line on failure)
//! - `json` - scanned tree as JSON
//! - `preview` - rendered index files from a dry run

mod json;
mod preview;
mod summary;

pub use json::print_json;
pub use preview::{print_preview, write_preview};
pub use summary::{print_error, print_summary, summary_line, write_summary};
