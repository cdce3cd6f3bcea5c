//! Creation-time format used by the registry file: `HH:MM DD-MM-YYYY`, local time.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Timelike};

pub const TIMESTAMP_FORMAT: &str = "%H:%M %d-%m-%Y";

/// Parse a registry timestamp. `None` when the text does not match the format
/// or names a local time that does not exist.
pub fn parse(text: &str) -> Option<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT).ok()?;
    Local.from_local_datetime(&naive).earliest()
}

/// Parse a registry timestamp, substituting the current time on failure.
pub fn parse_or_now(text: &str) -> DateTime<Local> {
    match parse(text) {
        Some(parsed) => parsed,
        None => {
            tracing::debug!("Unparsable creation time {:?}, using current time", text);
            now()
        }
    }
}

pub fn format(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time at minute precision, so it survives a format round trip unchanged.
pub fn now() -> DateTime<Local> {
    truncate_to_minute(Local::now())
}

fn truncate_to_minute(time: DateTime<Local>) -> DateTime<Local> {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}
