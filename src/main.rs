//! CLI entry point for vault-toc

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use vault_toc::toc::{DEFAULT_ATTACHMENTS_DIR, DEFAULT_HIDDEN_MARKER};
use vault_toc::{
    DryRunWriter, EntryOrder, LocalFs, SymlinkPolicy, TocConfig, TocGenerator, print_error,
    print_json, print_preview, print_summary,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "vault-toc")]
#[command(about = "Write a table of contents note into every folder of a markdown vault")]
#[command(version)]
struct Args {
    /// Vault root to index
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Skip entries whose name contains this marker
    #[arg(long = "hidden-marker", value_name = "TEXT", default_value = DEFAULT_HIDDEN_MARKER)]
    hidden_marker: String,

    /// Name of the attachments folder to leave out
    #[arg(long = "attachments-dir", value_name = "NAME", default_value = DEFAULT_ATTACHMENTS_DIR)]
    attachments_dir: String,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Keep directory listing order instead of sorting by name
    #[arg(long = "unsorted")]
    unsorted: bool,

    /// Index symlinked files and folders by their targets
    #[arg(short = 'L', long = "follow-symlinks")]
    follow_symlinks: bool,

    /// Print the index files instead of writing them
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Print the scanned tree as JSON
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Do not print the summary line
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

impl Args {
    fn toc_config(&self) -> TocConfig {
        TocConfig {
            hidden_marker: self.hidden_marker.clone(),
            attachments_dir: self.attachments_dir.clone(),
            ignore_patterns: self.ignore.clone(),
            order: if self.unsorted {
                EntryOrder::Listing
            } else {
                EntryOrder::Sorted
            },
            symlinks: if self.follow_symlinks {
                SymlinkPolicy::Follow
            } else {
                SymlinkPolicy::Skip
            },
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("vault_toc={}", default_level).into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let use_color = should_use_color(args.color);
    let generator = TocGenerator::new(args.toc_config());
    let local = LocalFs::new();

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let outcome = if args.dry_run {
        let writer = DryRunWriter::new();
        let outcome = generator.generate(&root, &local, &writer);
        outcome.map(|report| (report, writer.into_files()))
    } else {
        generator
            .generate(&root, &local, &local)
            .map(|report| (report, Vec::new()))
    };

    let (report, previews) = match outcome {
        Ok(done) => done,
        Err(e) => {
            if print_error(&e, use_color).is_err() {
                eprintln!("vault-toc: error: {}", e);
            }
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&report.root)
    } else if args.dry_run {
        print_preview(&previews).and_then(|_| {
            if args.quiet {
                Ok(())
            } else {
                println!();
                print_summary(&report, true, use_color)
            }
        })
    } else if args.quiet {
        Ok(())
    } else {
        print_summary(&report, false, use_color)
    };

    if let Err(e) = result {
        eprintln!("vault-toc: error writing output: {}", e);
        process::exit(1);
    }
}
