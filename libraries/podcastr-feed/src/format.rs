//! Display formatting for durations and publication dates.

use crate::error::{FeedError, Result};
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Locale used for month names in the listing
pub const DATE_LOCALE: Locale = Locale::pt_BR;

/// Short date pattern: day without padding, abbreviated month, two-digit year
const SHORT_DATE_FORMAT: &str = "%-d %b %y";

/// Timestamp layouts accepted besides RFC 3339 (no offset, local to the source)
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Convert a duration in seconds to `HH:MM:SS`
///
/// Every component is zero-padded to two digits. Hours are not wrapped,
/// so 100 hours and more print with three digits.
pub fn duration_to_time_string(duration_secs: u64) -> String {
    let hours = duration_secs / 3600;
    let minutes = (duration_secs % 3600) / 60;
    let seconds = duration_secs % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format an ISO-8601 timestamp as a localized short date (`8 jan 21`)
///
/// The calendar date is taken in the timestamp's own offset. Timestamps
/// without an offset are read as-is.
pub fn format_published_at(value: &str) -> Result<String> {
    let date = parse_published_date(value)?;
    let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));

    Ok(midnight
        .format_localized(SHORT_DATE_FORMAT, DATE_LOCALE)
        .to_string())
}

fn parse_published_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.date_naive());
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, layout) {
            return Ok(datetime.date());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| FeedError::InvalidDate {
        value: value.to_string(),
    })
}
