//! Last-modified timestamp parsing
//!
//! Accepts the shapes that last-modified metadata shows up in: the
//! browser `document.lastModified` form, HTTP headers, RFC 3339, plain
//! ISO dates and `@epoch` seconds.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::AppError;
use crate::utils::Timezone;

use super::date::FormattedDate;

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// A validated point in time. Never the epoch-zero sentinel, and always
/// within years 0000-9999 in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub(crate) fn from_utc(instant: DateTime<Utc>) -> Result<Self, AppError> {
        if instant.timestamp_millis() == 0 || !(0..=9999).contains(&instant.year()) {
            return Err(AppError::invalid_timestamp(&instant.to_rfc3339()));
        }
        Ok(Timestamp(instant))
    }

    pub(crate) fn from_system_time(time: SystemTime) -> Result<Self, AppError> {
        Self::from_utc(DateTime::<Utc>::from(time))
    }

    /// Modification time of `path`. I/O failures are `AppError::Io`; an
    /// unusable mtime is `AppError::InvalidTimestamp`.
    pub(crate) fn of_file(path: &Path) -> Result<Self, AppError> {
        let modified = fs::metadata(path)
            .and_then(|meta| meta.modified())
            .map_err(|e| AppError::io(path, e))?;
        Self::from_system_time(modified)
    }

    /// Parse raw last-modified metadata. Inputs without an offset are
    /// read as wall-clock time in `timezone`.
    pub(crate) fn parse(raw: &str, timezone: Timezone) -> Result<Self, AppError> {
        let input = raw.trim();
        let instant = parse_epoch(input)
            .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.to_utc()))
            .or_else(|| DateTime::parse_from_rfc2822(input).ok().map(|dt| dt.to_utc()))
            .or_else(|| parse_naive(input).and_then(|naive| timezone.localize(naive)))
            .ok_or_else(|| AppError::invalid_timestamp(raw))?;
        Self::from_utc(instant)
    }

    pub(crate) fn instant(self) -> DateTime<Utc> {
        self.0
    }

    /// Calendar date in `timezone`; `None` if the offset pushes it out of
    /// four-digit years.
    pub(crate) fn date_in(self, timezone: Timezone) -> Option<FormattedDate> {
        FormattedDate::from_date(timezone.date_of(self.0))
    }
}

fn parse_epoch(input: &str) -> Option<DateTime<Utc>> {
    let secs = input.strip_prefix('@')?.parse::<i64>().ok()?;
    DateTime::from_timestamp(secs, 0)
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    parse_document_form(input)
}

/// `MM/DD/YYYY[ HH:MM[:SS]]`. Years shorter than four digits are legacy
/// values and get normalized.
fn parse_document_form(input: &str) -> Option<NaiveDateTime> {
    let (date_part, time_part) = match input.split_once(char::is_whitespace) {
        Some((date, time)) => (date, Some(time.trim())),
        None => (input, None),
    };

    let mut fields = date_part.split('/');
    let (month, day, year) = (fields.next()?, fields.next()?, fields.next()?);
    if fields.next().is_some() || !is_digits(month, 2) || !is_digits(day, 2) || !is_digits(year, 4)
    {
        return None;
    }
    let month_index = month.parse::<u32>().ok()?.checked_sub(1)?;
    let (raw_year, day) = (year.parse().ok()?, day.parse().ok()?);
    let date = if year.len() < 4 {
        FormattedDate::from_legacy(raw_year, month_index, day)?.date()
    } else {
        NaiveDate::from_ymd_opt(raw_year, month_index + 1, day)?
    };

    let time = match time_part {
        None => NaiveTime::MIN,
        Some(t) => NaiveTime::parse_from_str(t, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
            .ok()?,
    };
    Some(date.and_time(time))
}

fn is_digits(field: &str, max_len: usize) -> bool {
    !field.is_empty() && field.len() <= max_len && field.bytes().all(|b| b.is_ascii_digit())
}
