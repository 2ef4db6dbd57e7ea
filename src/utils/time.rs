//! Time utilities: parsing HH:MM, minute-of-day formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Parse `HH:MM` into minutes since midnight.
pub fn parse_minute_of_day(t: &str) -> AppResult<u16> {
    let time = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok((time.hour() * 60 + time.minute()) as u16)
}

/// Minutes since midnight -> zero-padded `HH:MM`.
pub fn format_minute_of_day(mins: u16) -> String {
    format!("{:02}:{:02}", mins / 60, mins % 60)
}

/// Cut `HH:MM` out of an ISO-like `YYYY-MM-DDTHH:MM[:SS]` timestamp.
pub fn clock_part(timestamp: &str) -> Option<&str> {
    timestamp.get(11..16)
}
