//! Timestamp parsing and the short `17 Oct 2026` date format.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone};

use crate::error::TrackerError;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse a tracker timestamp. Accepts RFC 3339 (`2026-10-17T09:00:00.000Z`)
/// and the colon-less offset form used by issue payloads
/// (`2026-10-17T09:00:00.000+0000`).
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, TrackerError> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .map_err(|_| TrackerError::InvalidTimestamp(raw.to_string()))
}

/// Day, short month and year, without zero padding: `7 Oct 2026`.
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {month} {}", date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn parses_both_offset_forms() {
        let a = parse_timestamp("2026-10-17T09:30:00.000Z").unwrap();
        let b = parse_timestamp("2026-10-17T09:30:00.000+0000").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn formats_without_padding() {
        let date = Utc.with_ymd_and_hms(2026, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(format_date(&date), "7 Mar 2026");
    }
}
