//! Calendar helpers shared by the renewal projector and the aggregator.
//!
//! All arithmetic happens in UTC. Upstream records carry dates either as
//! full RFC 3339 timestamps or as bare `YYYY-MM-DD` strings from date inputs,
//! and both must land on the same timeline.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a loosely formatted date string into a UTC instant.
///
/// Accepts, in order:
/// - RFC 3339 timestamps (`2024-01-01T10:00:00.000Z`, `2024-01-01T10:00:00+02:00`)
/// - naive timestamps, interpreted as UTC
/// - plain dates, interpreted as UTC midnight
///
/// Returns `None` for anything else, including blank input.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Returns 00:00:00.000 UTC of the day containing `instant`.
pub fn start_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Returns 23:59:59.999 UTC of the day containing `instant`.
///
/// Saturates to the last representable instant on the last representable day.
pub fn end_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    start_of_day(instant)
        .checked_add_signed(Duration::days(1))
        .map(|next_day| next_day - Duration::milliseconds(1))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Whole calendar days from the day of `from` to the day of `to`.
///
/// Negative when `to` falls on an earlier day.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (start_of_day(to) - start_of_day(from)).num_days()
}
