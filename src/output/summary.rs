use crate::stamp::{Expansion, FileReport, StampStatus, StampSummary};

/// One-line result of a stamp run
pub(crate) fn format_stamp_summary(reports: &[FileReport], dry_run: bool) -> String {
    let summary = StampSummary::from_reports(reports);
    let verb = if dry_run { "Would stamp" } else { "Stamped" };
    format!(
        "{verb} {} file(s), {} unchanged, {} failed",
        summary.stamped, summary.unchanged, summary.failed
    )
}

/// Lines for stderr: patterns that matched nothing, then per-file failures
pub(crate) fn stamp_warnings(expansion: &Expansion, reports: &[FileReport]) -> Vec<String> {
    let unmatched = expansion
        .unmatched
        .iter()
        .map(|pattern| format!("Warning: No files match {pattern}"));
    let failures = reports.iter().filter_map(|report| match &report.status {
        StampStatus::Failed { error } => Some(format!("Error: {error}")),
        _ => None,
    });
    unmatched.chain(failures).collect()
}
