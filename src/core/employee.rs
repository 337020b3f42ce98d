use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{create_employee, find_employee, list_employees};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::ui::messages::success;

pub struct EmployeeLogic;

impl EmployeeLogic {
    /// Register a new employee and return the assigned id.
    pub fn register(pool: &DbPool, name: &str) -> AppResult<i64> {
        let id = create_employee(pool, name)?;

        audit_quiet(
            &pool.conn,
            "add_employee",
            &id.to_string(),
            &format!("Registered employee '{}'", name.trim()),
        );
        success(format!("Employee '{}' registered with id {}.", name.trim(), id));

        Ok(id)
    }

    /// Fetch an employee, failing when the id is unknown.
    pub fn require(pool: &DbPool, id: i64) -> AppResult<Employee> {
        find_employee(pool, id)?.ok_or(AppError::EmployeeNotFound(id))
    }

    pub fn all(pool: &DbPool) -> AppResult<Vec<Employee>> {
        list_employees(pool)
    }
}
