//! Overtime computation for a single interval and for a batch of records.
//!
//! A single record's value is encoded in **HH.MM form, not decimal hours**:
//! 1h30m is stored and printed as `1.30`, never `1.5`. Existing databases and
//! printed reports depend on this, so the encoding must stay as it is.

use crate::errors::{AppError, AppResult};
use crate::models::overtime::OvertimeRecord;
use chrono::{Days, NaiveDateTime};
use std::fmt;

/// Overtime duration encoded as `hours + minutes / 100`.
///
/// `minutes` is always in `0..=59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct OvertimeValue {
    hours: i64,
    minutes: i64,
}

impl OvertimeValue {
    /// Build the HH.MM value from a net amount of minutes.
    /// Negative amounts collapse to zero.
    pub fn from_minutes(net: i64) -> Self {
        let net = net.max(0);
        Self {
            hours: net / 60,
            minutes: net % 60,
        }
    }

    /// Rebuild a value from the REAL stored in the `hours` column.
    pub fn from_stored(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self::default();
        }
        let hours = value.trunc() as i64;
        let minutes = ((value - value.trunc()) * 100.0).round() as i64;
        Self::from_minutes(hours * 60 + minutes)
    }

    pub fn hours(&self) -> i64 {
        self.hours
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    /// Total minutes represented by this value.
    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }

    /// The number written to storage: `hours + minutes / 100`.
    pub fn as_f64(&self) -> f64 {
        self.hours as f64 + self.minutes as f64 / 100.0
    }
}

impl fmt::Display for OvertimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.hours, self.minutes)
    }
}

/// Midnight correction: an end that is clock-earlier than the start is moved
/// to the following calendar day.
pub fn normalize_end(start: NaiveDateTime, end: NaiveDateTime) -> AppResult<NaiveDateTime> {
    if end >= start {
        return Ok(end);
    }

    end.checked_add_days(Days::new(1))
        .ok_or_else(|| AppError::InvalidTimestamp(end.format("%Y-%m-%d %H:%M").to_string()))
}

/// Minutes between start and the (midnight-corrected) end.
pub fn worked_minutes(start: NaiveDateTime, end: NaiveDateTime) -> AppResult<i64> {
    let end = normalize_end(start, end)?;
    Ok((end - start).num_minutes())
}

/// Compute the HH.MM overtime value of one interval.
///
/// Fails with [`AppError::InvalidInterval`] when the worked time does not
/// strictly exceed the break.
pub fn compute_overtime(
    start: NaiveDateTime,
    end: NaiveDateTime,
    break_minutes: i64,
) -> AppResult<OvertimeValue> {
    if break_minutes < 0 {
        return Err(AppError::InvalidBreak(break_minutes));
    }

    let worked = worked_minutes(start, end)?;

    if worked <= break_minutes {
        return Err(AppError::InvalidInterval {
            worked,
            break_minutes,
        });
    }

    Ok(OvertimeValue::from_minutes(worked - break_minutes))
}

/// Total net minutes of a batch of records.
///
/// Each record contributes its midnight-corrected worked time minus its own
/// persisted break.
pub fn sum_overtime_minutes(records: &[OvertimeRecord]) -> AppResult<i64> {
    let mut total: i64 = 0;

    for rec in records {
        let worked = worked_minutes(rec.start, rec.end)?;
        total = total
            .checked_add(worked - rec.break_minutes)
            .ok_or_else(|| AppError::InvalidNumber("overtime total overflow".into()))?;
    }

    Ok(total)
}

/// Ordinary HH:MM split of a minute total.
pub fn split_total(minutes: i64) -> (i64, i64) {
    (minutes / 60, minutes % 60)
}

/// Human-readable total, e.g. `3 hours and 15 minutes`.
pub fn format_total(minutes: i64) -> String {
    let (h, m) = split_total(minutes);
    format!("{} hours and {} minutes", h, m)
}
