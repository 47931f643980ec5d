mod json;
mod summary;

pub(crate) use json::{output_footer_json, output_stamp_json};
pub(crate) use summary::{format_stamp_summary, stamp_warnings};
