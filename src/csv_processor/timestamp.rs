use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses an export timestamp (`YYYY-MM-DD HH:MM:SS`) and renders it as an
/// ISO-8601 local datetime. Blank or malformed input yields `None`.
///
/// chrono's parser skips whitespace around numeric fields and accepts leap
/// seconds, so the date and time halves are checked before it sees them.
pub fn normalize_timestamp(value: &str) -> Option<String> {
    if value.starts_with(char::is_whitespace) || value.ends_with(char::is_whitespace) {
        return None;
    }

    let (date, time) = value.split_once(char::is_whitespace)?;
    let time = time.trim_start();

    if !date.chars().all(|c| c.is_ascii_digit() || c == '-')
        || !time.chars().all(|c| c.is_ascii_digit() || c == ':')
    {
        return None;
    }

    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
    let time = NaiveTime::parse_from_str(time, TIME_FORMAT).ok()?;
    if time.nanosecond() >= 1_000_000_000 {
        return None;
    }

    Some(NaiveDateTime::new(date, time).format(ISO_FORMAT).to_string())
}
