use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    if s.len() != 7 {
        return Err(AppError::InvalidMonth(s.to_string()));
    }
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))
}

pub fn current_month() -> NaiveDate {
    let t = today();
    t.with_day(1).unwrap_or(t)
}

/// Half-open bounds `[first day 00:00, first day of next month 00:00)`.
pub fn month_bounds(month: NaiveDate) -> AppResult<(NaiveDateTime, NaiveDateTime)> {
    let first = month
        .with_day(1)
        .ok_or_else(|| AppError::InvalidMonth(month.to_string()))?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or_else(|| AppError::InvalidMonth(month.format("%Y-%m").to_string()))?;

    Ok((
        first.and_time(NaiveTime::MIN),
        next.and_time(NaiveTime::MIN),
    ))
}

/// `MM/YYYY`, as printed on reports.
pub fn month_label(month: NaiveDate) -> String {
    month.format("%m/%Y").to_string()
}

/// `YYYY-MM`, as used in file names and prompts.
pub fn month_key(month: NaiveDate) -> String {
    month.format("%Y-%m").to_string()
}
