//! Time utilities: parsing `YYYY-MM-DD HH:MM` timestamps and small numeric inputs.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Storage and input format for timestamps.
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M";

/// Format used on printed reports.
pub const REPORT_TIMESTAMP_FMT: &str = "%d/%m/%Y %H:%M";

pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FMT)
        .map_err(|_| AppError::InvalidTimestamp(s.trim().to_string()))
}

/// Parse a break duration in minutes. Empty input means no break.
pub fn parse_break_minutes(s: &str) -> AppResult<i64> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }

    let mins: i64 = s
        .parse()
        .map_err(|_| AppError::InvalidNumber(format!("'{}' is not a number of minutes", s)))?;

    if mins < 0 {
        return Err(AppError::InvalidBreak(mins));
    }
    Ok(mins)
}

pub fn parse_id(s: &str) -> AppResult<i64> {
    s.trim()
        .parse()
        .map_err(|_| AppError::InvalidNumber(format!("'{}' is not a valid employee id", s.trim())))
}
