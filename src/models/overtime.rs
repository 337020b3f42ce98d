use super::employee::Employee;
use crate::core::calculator::OvertimeValue;
use crate::utils::time::TIMESTAMP_FMT;
use chrono::{NaiveDate, NaiveDateTime};

/// A persisted overtime interval, joined with its employee name.
#[derive(Debug, Clone)]
pub struct OvertimeRecord {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    /// `start_time` column, TEXT `YYYY-MM-DD HH:MM`
    pub start: NaiveDateTime,
    /// `end_time` as entered, not midnight-corrected
    pub end: NaiveDateTime,
    /// NULL reads as 0
    pub break_minutes: i64,
    /// NULL reads as ""
    pub note: String,
    pub created_at: String,
    /// `hours` column (REAL, HH.MM)
    pub hours_extra: OvertimeValue,
}

impl OvertimeRecord {
    pub fn start_str(&self) -> String {
        self.start.format(TIMESTAMP_FMT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(TIMESTAMP_FMT).to_string()
    }
}

/// Values for a record about to be appended.
/// `hours_extra` must come from `compute_overtime`.
#[derive(Debug, Clone)]
pub struct NewOvertimeRecord {
    pub employee_id: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub note: String,
    pub break_minutes: i64,
    pub hours_extra: OvertimeValue,
}

/// One month of records plus their aggregated total (net minutes).
#[derive(Debug, Clone)]
pub struct MonthlyOvertime {
    pub month: NaiveDate,
    pub employee: Option<Employee>,
    pub records: Vec<OvertimeRecord>,
    pub total_minutes: i64,
}
