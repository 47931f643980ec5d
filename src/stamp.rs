//! Batch footer insertion into HTML files
//!
//! Each file gets its own footer from its own modification time, which is
//! read before the file is rewritten.

use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::footer::{DateFooter, FormattedDate, Timestamp};
use crate::utils::debug_log;

/// Files matched by the stamp patterns
#[derive(Debug, Default)]
pub(crate) struct Expansion {
    pub(crate) files: Vec<PathBuf>,
    pub(crate) unmatched: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(crate) enum StampStatus {
    Stamped {
        date: FormattedDate,
        replacements: usize,
    },
    NoMarker,
    NoTimestamp,
    Failed {
        error: String,
    },
}

#[derive(Debug, Serialize)]
pub(crate) struct FileReport {
    pub(crate) path: PathBuf,
    #[serde(flatten)]
    pub(crate) status: StampStatus,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct StampSummary {
    pub(crate) stamped: usize,
    pub(crate) unchanged: usize,
    pub(crate) failed: usize,
}

impl StampSummary {
    pub(crate) fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            match report.status {
                StampStatus::Stamped { .. } => summary.stamped += 1,
                StampStatus::NoMarker | StampStatus::NoTimestamp => summary.unchanged += 1,
                StampStatus::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }
}

/// Expand glob patterns into a sorted, de-duplicated list of regular files
pub(crate) fn expand_patterns(patterns: &[String]) -> Result<Expansion, AppError> {
    let mut expansion = Expansion::default();
    for pattern in patterns {
        let paths = glob::glob(pattern).map_err(|source| AppError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        let before = expansion.files.len();
        for entry in paths {
            match entry {
                Ok(path) if path.is_file() => expansion.files.push(path),
                Ok(_) => {}
                Err(e) => debug_log!("Skipping unreadable path: {e}"),
            }
        }
        if expansion.files.len() == before {
            expansion.unmatched.push(pattern.clone());
        }
    }
    expansion.files.sort();
    expansion.files.dedup();
    Ok(expansion)
}

/// Stamp every file in parallel. Reports keep the order of `files`.
pub(crate) fn stamp_files(
    files: &[PathBuf],
    marker: &str,
    footer: &DateFooter,
    dry_run: bool,
) -> Vec<FileReport> {
    files
        .par_iter()
        .map(|path| {
            let status = stamp_file(path, marker, footer, dry_run).unwrap_or_else(|e| {
                StampStatus::Failed {
                    error: e.to_string(),
                }
            });
            debug_log!("{}: {:?}", path.display(), status);
            FileReport {
                path: path.clone(),
                status,
            }
        })
        .collect()
}

fn stamp_file(
    path: &Path,
    marker: &str,
    footer: &DateFooter,
    dry_run: bool,
) -> Result<StampStatus, AppError> {
    let bytes = fs::read(path).map_err(|e| AppError::io(path, e))?;
    let content = String::from_utf8(bytes).map_err(|_| AppError::NotText {
        path: path.to_path_buf(),
    })?;
    let replacements = content.matches(marker).count();
    if replacements == 0 {
        return Ok(StampStatus::NoMarker);
    }

    let timestamp = match Timestamp::of_file(path) {
        Ok(ts) => ts,
        Err(AppError::InvalidTimestamp { input }) => {
            debug_log!("{}: unusable modification time {input}", path.display());
            return Ok(StampStatus::NoTimestamp);
        }
        Err(e) => return Err(e),
    };

    let Some(rendered) = footer.footer_for(timestamp) else {
        return Ok(StampStatus::NoTimestamp);
    };
    if !dry_run {
        let stamped = content.replace(marker, rendered.html.as_str());
        fs::write(path, stamped).map_err(|e| AppError::io(path, e))?;
    }
    Ok(StampStatus::Stamped {
        date: rendered.date,
        replacements,
    })
}
