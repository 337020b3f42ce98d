// src/export/model.rs

use crate::models::overtime::OvertimeRecord;
use serde::Serialize;

/// Flat row used by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: i64,
    pub employee_id: i64,
    pub employee: String,
    pub start: String,
    pub end: String,
    pub break_minutes: i64,
    pub note: String,
    /// HH.MM encoded, e.g. "3.30" for 3h30m
    pub hours_extra: String,
    pub created_at: String,
}

impl From<&OvertimeRecord> for RecordExport {
    fn from(r: &OvertimeRecord) -> Self {
        Self {
            id: r.id,
            employee_id: r.employee_id,
            employee: r.employee_name.clone(),
            start: r.start_str(),
            end: r.end_str(),
            break_minutes: r.break_minutes,
            note: r.note.clone(),
            hours_extra: r.hours_extra.to_string(),
            created_at: r.created_at.clone(),
        }
    }
}

pub fn records_to_export(records: &[OvertimeRecord]) -> Vec<RecordExport> {
    records.iter().map(RecordExport::from).collect()
}
