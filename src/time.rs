//! Time utilities for Dayforce query parameters.
//!
//! The Dayforce API expects date-valued query parameters in a fixed
//! wall-clock pattern with no offset suffix: `YYYY-MM-DDThh:mm:ss`.

use chrono::{DateTime, TimeZone};
use std::fmt;

/// The fixed timestamp pattern used for date-valued query parameters.
pub const FILTER_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Formats a date for use in a query parameter.
///
/// The datetime's own wall-clock representation is used, whatever its
/// timezone; no offset suffix is emitted.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use dayforce_api::time::format_filter_date;
///
/// let date = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
/// assert_eq!(format_filter_date(&date), "2024-03-01T09:30:00");
/// ```
pub fn format_filter_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    date.format(FILTER_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};

    #[test]
    fn utc_date_formats_without_offset() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(format_filter_date(&date), "2024-01-15T00:00:00");
    }

    #[test]
    fn offset_date_formats_its_wall_clock() {
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();
        let date = tz.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap();
        assert_eq!(format_filter_date(&date), "2024-06-30T23:59:59");
    }

    #[test]
    fn single_digit_fields_are_zero_padded() {
        let date = Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap();
        assert_eq!(format_filter_date(&date), "2024-02-03T04:05:06");
    }
}
