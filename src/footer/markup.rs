use std::fmt;

use serde::Serialize;

use super::date::FormattedDate;

/// Rendered footer HTML, ready to be inserted into a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct MarkupFragment(String);

impl MarkupFragment {
    pub(crate) fn footer(date: FormattedDate) -> Self {
        let lines = [
            r#"<table width="100%" style="border-style: inherit;">"#.to_string(),
            "  <tbody>".to_string(),
            r#"    <tr style="border-style: inherit;">"#.to_string(),
            r#"      <td align="right" style="font-size: small; border-style: inherit;">"#
                .to_string(),
            format!("        This page was last modified on {date}."),
            "      </td>".to_string(),
            "    </tr>".to_string(),
            "  </tbody>".to_string(),
            "</table>".to_string(),
        ];
        MarkupFragment(lines.join("\n"))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkupFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
