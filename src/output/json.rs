use serde_json::json;

use crate::footer::RenderedFooter;
use crate::stamp::{Expansion, FileReport, StampSummary};

/// JSON for `render`/`date`. `date` output leaves out the HTML.
pub(crate) fn output_footer_json(footer: &RenderedFooter, include_html: bool) -> String {
    let mut value = json!({
        "date": footer.date,
        "timestamp": footer.timestamp.instant().to_rfc3339(),
    });
    if include_html {
        value["html"] = json!(footer.html);
    }
    format!("{value:#}")
}

pub(crate) fn output_stamp_json(
    expansion: &Expansion,
    reports: &[FileReport],
    dry_run: bool,
) -> String {
    let value = json!({
        "dry_run": dry_run,
        "summary": StampSummary::from_reports(reports),
        "files": reports,
        "unmatched_patterns": expansion.unmatched,
    });
    format!("{value:#}")
}
