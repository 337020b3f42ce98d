use crate::core::calculator::sum_overtime_minutes;
use crate::core::employee::EmployeeLogic;
use crate::db::pool::DbPool;
use crate::db::queries::query_records;
use crate::errors::AppResult;
use crate::models::overtime::MonthlyOvertime;
use crate::utils::date::month_bounds;
use chrono::NaiveDate;

pub struct ListLogic;

impl ListLogic {
    /// Load one month of records (all employees when `employee_id` is None)
    /// together with the aggregated total.
    pub fn monthly(
        pool: &DbPool,
        employee_id: Option<i64>,
        month: NaiveDate,
    ) -> AppResult<MonthlyOvertime> {
        let employee = match employee_id {
            Some(id) => Some(EmployeeLogic::require(pool, id)?),
            None => None,
        };

        let (from, to) = month_bounds(month)?;
        let records = query_records(pool, employee_id, from, to)?;
        let total_minutes = sum_overtime_minutes(&records)?;

        Ok(MonthlyOvertime {
            month,
            employee,
            records,
            total_minutes,
        })
    }
}
