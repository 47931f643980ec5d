//! "Page last modified" footer rendering
//!
//! Validation failures never surface to the caller: an unusable timestamp
//! simply means there is no footer. With `--debug` the reason is printed.

pub(crate) mod date;
pub(crate) mod markup;
pub(crate) mod timestamp;

pub(crate) use date::FormattedDate;
pub(crate) use markup::MarkupFragment;
pub(crate) use timestamp::Timestamp;

use crate::utils::{Timezone, debug_log};

/// Everything derived from one valid timestamp
#[derive(Debug, Clone)]
pub(crate) struct RenderedFooter {
    pub(crate) timestamp: Timestamp,
    pub(crate) date: FormattedDate,
    pub(crate) html: MarkupFragment,
}

/// Footer formatter bound to a display timezone
#[derive(Debug, Clone, Copy)]
pub(crate) struct DateFooter {
    timezone: Timezone,
}

impl DateFooter {
    pub(crate) fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }

    /// Render raw last-modified metadata. Absent, malformed, epoch-zero or
    /// out-of-range input yields `None`; otherwise `html` is the fragment.
    pub(crate) fn render(&self, last_modified: Option<&str>) -> Option<RenderedFooter> {
        let Some(raw) = last_modified else {
            debug_log!("No last-modified timestamp available");
            return None;
        };
        match Timestamp::parse(raw, self.timezone) {
            Ok(timestamp) => self.footer_for(timestamp),
            Err(e) => {
                debug_log!("{e}, footer suppressed");
                None
            }
        }
    }

    pub(crate) fn footer_for(&self, timestamp: Timestamp) -> Option<RenderedFooter> {
        let Some(date) = timestamp.date_in(self.timezone) else {
            debug_log!(
                "{} has no four-digit date in {:?}, footer suppressed",
                timestamp.instant().to_rfc3339(),
                self.timezone
            );
            return None;
        };
        Some(RenderedFooter {
            timestamp,
            date,
            html: MarkupFragment::footer(date),
        })
    }
}
