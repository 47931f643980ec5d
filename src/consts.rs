/// Date format of the rendered footer: "2023-07-04"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Text replaced by the footer when stamping HTML files
pub(crate) const DEFAULT_MARKER: &str = "<!-- lastmod -->";

/// Environment variable carrying the document's last-modified metadata (SSI/CGI)
pub(crate) const LAST_MODIFIED_ENV: &str = "LAST_MODIFIED";

/// Two-digit years below this are read as 20xx, the rest as 19xx
pub(crate) const LEGACY_YEAR_PIVOT: i32 = 70;
