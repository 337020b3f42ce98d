use crate::core::calculator::{OvertimeValue, compute_overtime};
use crate::core::employee::EmployeeLogic;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::append_overtime_record;
use crate::errors::AppResult;
use crate::models::overtime::NewOvertimeRecord;
use crate::ui::messages::success;
use chrono::NaiveDateTime;

/// High-level business logic for recording an overtime interval.
pub struct AddLogic;

impl AddLogic {
    /// Validate, compute and append one record.
    ///
    /// Nothing is written when the employee is unknown or the worked time
    /// does not exceed the break. Returns the new record id and its HH.MM value.
    pub fn apply(
        pool: &DbPool,
        employee_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
        break_minutes: i64,
        note: &str,
    ) -> AppResult<(i64, OvertimeValue)> {
        let employee = EmployeeLogic::require(pool, employee_id)?;
        let hours_extra = compute_overtime(start, end, break_minutes)?;

        let record = NewOvertimeRecord {
            employee_id,
            start,
            end,
            note: note.trim().to_string(),
            break_minutes,
            hours_extra,
        };
        let id = append_overtime_record(pool, &record)?;

        audit_quiet(
            &pool.conn,
            "add_overtime",
            &id.to_string(),
            &format!(
                "{}: {} → {} (break {} min) = {}",
                employee.name,
                start.format("%Y-%m-%d %H:%M"),
                end.format("%Y-%m-%d %H:%M"),
                break_minutes,
                hours_extra
            ),
        );
        success(format!(
            "Overtime added for {}: {} (HH.MM).",
            employee.name, hours_extra
        ));

        Ok((id, hours_extra))
    }
}
