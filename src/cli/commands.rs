//! CLI subcommand definitions

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Main CLI commands
#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Commands {
    /// Print the footer HTML fragment (default)
    Render(SourceArgs),
    /// Print only the YYYY-MM-DD date
    Date(SourceArgs),
    /// Replace the marker in HTML files with a footer built from each file's modification time
    Stamp(StampArgs),
}

/// Where the last-modified timestamp comes from.
/// Without either flag, `$LAST_MODIFIED` is read.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct SourceArgs {
    /// Raw last-modified value (e.g. "07/04/2023 10:00:00", an HTTP date, RFC 3339, @epoch)
    #[arg(short, long, value_name = "RAW", conflicts_with = "file")]
    pub(crate) timestamp: Option<String>,

    /// Use the modification time of this file
    #[arg(short, long, value_name = "PATH")]
    pub(crate) file: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct StampArgs {
    /// HTML files or glob patterns (e.g. "site/**/*.html")
    #[arg(required = true, value_name = "PATTERN")]
    pub(crate) patterns: Vec<String>,

    /// Text to replace with the footer [default: "<!-- lastmod -->"]
    #[arg(short, long, value_name = "TEXT")]
    pub(crate) marker: Option<String>,

    /// Report what would change without writing files
    #[arg(short = 'n', long)]
    pub(crate) dry_run: bool,
}

/// Normalized timestamp source
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LastModifiedSource {
    Raw(String),
    File(PathBuf),
    Environment,
}

impl From<&SourceArgs> for LastModifiedSource {
    fn from(args: &SourceArgs) -> Self {
        match (&args.timestamp, &args.file) {
            (Some(raw), _) => LastModifiedSource::Raw(raw.clone()),
            (None, Some(path)) => LastModifiedSource::File(path.clone()),
            (None, None) => LastModifiedSource::Environment,
        }
    }
}
