//! Date range and per-day calendar calculations.
//!
//! Two string representations leave this module and both are part of
//! the wire contract: ISO `yyyy-mm-dd` for the schedule-level dates and
//! unpadded `d-m-yyyy` for the per-day attach calls.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};

/// Parse an ISO `yyyy-mm-dd` date string
pub fn parse_iso(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| Error::Parse(format!("invalid date {value:?}: {e}")))
}

/// Number of calendar days in the inclusive range `from..=to`.
///
/// `2025-02-10` to `2025-02-12` is 3 days.
#[must_use]
pub fn trip_length_days(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days() + 1
}

/// Schedule-level ISO representation, e.g. `2025-02-10`
#[must_use]
pub fn iso_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Calendar date of a 1-based day id within the trip
#[must_use]
pub fn day_date(from: NaiveDate, day_id: u32) -> NaiveDate {
    from + chrono::Days::new(u64::from(day_id.saturating_sub(1)))
}

/// Per-day attach representation, unpadded `d-m-yyyy`, e.g. `10-2-2025`
#[must_use]
pub fn attach_string(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn inclusive_range_counts_both_endpoints() {
        assert_eq!(trip_length_days(date(2025, 2, 10), date(2025, 2, 12)), 3);
        assert_eq!(trip_length_days(date(2025, 2, 10), date(2025, 2, 10)), 1);
    }

    #[test]
    fn range_spans_month_boundary() {
        assert_eq!(trip_length_days(date(2025, 1, 30), date(2025, 2, 2)), 4);
    }

    #[test]
    fn iso_string_is_zero_padded() {
        assert_eq!(iso_string(date(2025, 2, 10)), "2025-02-10");
        assert_eq!(iso_string(date(2025, 11, 3)), "2025-11-03");
    }

    #[test]
    fn attach_string_is_unpadded_day_month_year() {
        assert_eq!(attach_string(date(2025, 2, 10)), "10-2-2025");
        assert_eq!(attach_string(date(2025, 11, 3)), "3-11-2025");
    }

    #[test]
    fn day_dates_walk_forward_from_the_start() {
        let from = date(2025, 2, 10);
        assert_eq!(day_date(from, 1), date(2025, 2, 10));
        assert_eq!(day_date(from, 2), date(2025, 2, 11));
        assert_eq!(day_date(from, 3), date(2025, 2, 12));
    }

    #[test]
    fn parse_rejects_non_iso_input() {
        assert!(parse_iso("10-02-2025").is_err());
        assert!(parse_iso("not a date").is_err());
        assert!(parse_iso("2025-02-10").is_ok());
    }
}
