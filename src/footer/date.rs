use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::consts::{DATE_FORMAT, LEGACY_YEAR_PIVOT};

/// Expand a legacy year value to a four-digit year.
///
/// Values below 1000 are years counted from 1900 (`123` is 2023); two-digit
/// values below [`LEGACY_YEAR_PIVOT`] first gain a century (`5` is 2005, `99`
/// is 1999). Negative input has no meaning and yields `None`.
pub(crate) fn normalize_year(raw: i32) -> Option<i32> {
    if raw < 0 {
        return None;
    }
    let mut year = raw;
    if year < LEGACY_YEAR_PIVOT {
        year += 100;
    }
    if year < 1000 {
        year += 1900;
    }
    Some(year)
}

/// A calendar date rendered as `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct FormattedDate(NaiveDate);

impl FormattedDate {
    /// `None` for years that do not fit four digits
    pub(crate) fn from_date(date: NaiveDate) -> Option<Self> {
        (0..=9999)
            .contains(&date.year())
            .then_some(FormattedDate(date))
    }

    /// Build from legacy components: a raw year (see [`normalize_year`]),
    /// a zero-based month index and a day of month.
    pub(crate) fn from_legacy(raw_year: i32, month_index: u32, day: u32) -> Option<Self> {
        let year = normalize_year(raw_year)?;
        let month = month_index.checked_add(1)?;
        NaiveDate::from_ymd_opt(year, month, day).and_then(Self::from_date)
    }

    pub(crate) fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for FormattedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for FormattedDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_two_digit_years() {
        assert_eq!(normalize_year(99), Some(1999));
        assert_eq!(normalize_year(70), Some(1970));
        assert_eq!(normalize_year(69), Some(2069));
        assert_eq!(normalize_year(5), Some(2005));
        assert_eq!(normalize_year(0), Some(2000));
    }

    #[test]
    fn normalize_years_since_1900() {
        assert_eq!(normalize_year(105), Some(2005));
        assert_eq!(normalize_year(123), Some(2023));
        assert_eq!(normalize_year(999), Some(2899));
    }

    #[test]
    fn normalize_keeps_full_years() {
        assert_eq!(normalize_year(1999), Some(1999));
        assert_eq!(normalize_year(2023), Some(2023));
    }

    #[test]
    fn normalize_rejects_negative() {
        assert_eq!(normalize_year(-1), None);
    }

    #[test]
    fn legacy_month_is_one_based_and_padded() {
        let d = FormattedDate::from_legacy(123, 0, 15).unwrap();
        assert_eq!(d.to_string(), "2023-01-15");
    }

    #[test]
    fn legacy_day_is_padded() {
        let d = FormattedDate::from_legacy(2023, 6, 3).unwrap();
        assert_eq!(d.to_string(), "2023-07-03");
        let d = FormattedDate::from_legacy(99, 11, 31).unwrap();
        assert_eq!(d.to_string(), "1999-12-31");
    }

    #[test]
    fn legacy_rejects_impossible_dates() {
        assert!(FormattedDate::from_legacy(123, 1, 30).is_none());
        assert!(FormattedDate::from_legacy(123, 12, 1).is_none());
        assert!(FormattedDate::from_legacy(123, 0, 0).is_none());
        assert!(FormattedDate::from_legacy(-4, 0, 1).is_none());
    }

    #[test]
    fn four_digit_years_are_zero_padded() {
        let d = FormattedDate::from_date(NaiveDate::from_ymd_opt(2005, 3, 9).unwrap()).unwrap();
        assert_eq!(d.to_string(), "2005-03-09");
        assert_eq!(d.date(), NaiveDate::from_ymd_opt(2005, 3, 9).unwrap());
    }

    #[test]
    fn from_date_rejects_years_beyond_four_digits() {
        let first = NaiveDate::from_ymd_opt(0, 1, 1).unwrap();
        assert_eq!(FormattedDate::from_date(first).unwrap().to_string(), "0000-01-01");
        let last = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        assert_eq!(FormattedDate::from_date(last).unwrap().to_string(), "9999-12-31");

        assert!(FormattedDate::from_date(NaiveDate::from_ymd_opt(10000, 1, 1).unwrap()).is_none());
        assert!(FormattedDate::from_date(NaiveDate::from_ymd_opt(-1, 12, 31).unwrap()).is_none());
    }

    #[test]
    fn serializes_as_string() {
        let d = FormattedDate::from_legacy(123, 6, 4).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), r#""2023-07-04""#);
    }
}
