//! # Temporal Parsing
//!
//! `lastUpdated` is stored as the string the dataset author wrote. This
//! module decides whether that string is a usable ISO-8601 value.
//!
//! Accepted forms, all interpreted as UTC when no offset is given:
//!
//! - RFC 3339 date-time with offset: `2024-01-15T10:30:00Z`, `2024-01-15T10:30:00+02:00`
//! - Date-time without offset: `2024-01-15T10:30:00`, `2024-01-15T10:30`
//! - Calendar date: `2024-01-15`
//! - Year-month: `2024-01`
//! - Year: `2024`

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::DateParseError;

/// Parse an ISO-8601 date or date-time into a UTC instant.
///
/// # Errors
///
/// Returns [`DateParseError`] carrying the input if none of the accepted
/// forms match.
pub fn parse_iso8601(input: &str) -> Result<DateTime<Utc>, DateParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DateParseError(input.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    // Partial dates: pad to the first day and reuse the calendar parser.
    let padded = match s.len() {
        7 => format!("{s}-01"),
        4 if s.bytes().all(|b| b.is_ascii_digit()) => format!("{s}-01-01"),
        _ => return Err(DateParseError(input.to_string())),
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| DateParseError(input.to_string()))
}

/// Returns `true` if `input` parses under [`parse_iso8601`].
pub fn is_iso8601(input: &str) -> bool {
    parse_iso8601(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use proptest::prelude::*;

    #[test]
    fn parses_calendar_date() {
        let dt = parse_iso8601("2024-01-15").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 15));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_iso8601("2024-01-15T12:00:00+02:00").unwrap();
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn parses_naive_datetime_as_utc() {
        let dt = parse_iso8601("2024-03-01T08:15:30").unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (8, 15, 30));
    }

    #[test]
    fn parses_partial_dates() {
        assert_eq!(parse_iso8601("2023-07").unwrap().month(), 7);
        assert_eq!(parse_iso8601("2023").unwrap().year(), 2023);
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "   ", "not-a-date", "2024-13-01", "2024-02-30", "15/01/2024", "20x4"] {
            assert!(!is_iso8601(bad), "{bad:?} should not parse");
        }
    }

    #[test]
    fn error_carries_input() {
        let err = parse_iso8601("yesterday").unwrap_err();
        assert_eq!(err, DateParseError("yesterday".into()));
    }

    proptest! {
        /// Arbitrary input yields a value or an error, never a panic.
        #[test]
        fn arbitrary_input_never_panics(input in "\\PC{0,32}") {
            let _ = parse_iso8601(&input);
        }

        /// Every calendar date parses back to midnight UTC of that date.
        #[test]
        fn calendar_dates_parse(
            year in 1900i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let parsed = parse_iso8601(&format!("{year:04}-{month:02}-{day:02}")).unwrap();
            prop_assert_eq!((parsed.year(), parsed.month(), parsed.day()), (year, month, day));
            prop_assert_eq!(parsed.hour(), 0);
        }
    }
}
