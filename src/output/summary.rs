//! Status line printed after a run

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::TocError;
use crate::toc::ScanReport;

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}

/// Human-readable summary of a run, without color.
pub fn summary_line(report: &ScanReport, dry_run: bool) -> String {
    let verb = if dry_run { "Would create" } else { "Created" };
    format!(
        "{} {} ({}, {})",
        verb,
        plural(
            report.written.len(),
            "table of contents",
            "tables of contents"
        ),
        plural(report.directories(), "folder", "folders"),
        plural(report.files(), "file", "files"),
    )
}

/// Write the summary line, the verb in bold green.
pub fn write_summary<W: WriteColor>(out: &mut W, report: &ScanReport, dry_run: bool) -> io::Result<()> {
    let line = summary_line(report, dry_run);
    let (verb, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));

    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "{}", verb)?;
    out.reset()?;
    writeln!(out, " {}", rest)?;
    Ok(())
}

/// Print the summary line to stdout.
pub fn print_summary(report: &ScanReport, dry_run: bool, use_color: bool) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(use_color));
    write_summary(&mut stdout, report, dry_run)
}

/// Print a failed run to stderr as `vault-toc: <error>`.
pub fn print_error(err: &TocError, use_color: bool) -> io::Result<()> {
    let mut stderr = StandardStream::stderr(color_choice(use_color));
    write!(stderr, "vault-toc: ")?;
    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stderr, "error")?;
    stderr.reset()?;
    writeln!(stderr, ": {}", err)?;
    Ok(())
}

fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
