use crate::core::calculator::OvertimeValue;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::overtime::{NewOvertimeRecord, OvertimeRecord};
use crate::utils::time::TIMESTAMP_FMT;
use chrono::NaiveDateTime;
use rusqlite::{OptionalExtension, Result, Row, params};

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

/// Insert a new employee and return its id.
pub fn create_employee(pool: &DbPool, name: &str) -> AppResult<i64> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::EmptyName);
    }

    pool.conn
        .execute("INSERT INTO employees (name) VALUES (?1)", [name])?;
    Ok(pool.conn.last_insert_rowid())
}

pub fn find_employee(pool: &DbPool, id: i64) -> AppResult<Option<Employee>> {
    let emp = pool
        .conn
        .query_row(
            "SELECT id, name FROM employees WHERE id = ?1",
            [id],
            map_employee,
        )
        .optional()?;
    Ok(emp)
}

pub fn list_employees(pool: &DbPool) -> AppResult<Vec<Employee>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, name FROM employees ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn map_employee(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

// ---------------------------------------------------------------------------
// Overtime records
// ---------------------------------------------------------------------------

/// Append one overtime record. Fails on constraint violations
/// (unknown employee, negative break).
pub fn append_overtime_record(pool: &DbPool, rec: &NewOvertimeRecord) -> AppResult<i64> {
    if rec.break_minutes < 0 {
        return Err(AppError::InvalidBreak(rec.break_minutes));
    }

    pool.conn.execute(
        "INSERT INTO overtime_records (employee_id, hours, start_time, end_time, note, break_minutes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            rec.employee_id,
            rec.hours_extra.as_f64(),
            rec.start.format(TIMESTAMP_FMT).to_string(),
            rec.end.format(TIMESTAMP_FMT).to_string(),
            rec.note,
            rec.break_minutes,
        ],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

/// Records whose start lies in `[from, to)`, optionally for one employee,
/// ordered by start time then id.
pub fn query_records(
    pool: &DbPool,
    employee_id: Option<i64>,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> AppResult<Vec<OvertimeRecord>> {
    let mut stmt = pool.conn.prepare(
        "SELECT r.id, r.employee_id, e.name AS employee_name, r.hours,
                r.start_time, r.end_time, r.note, r.break_minutes, r.created_at
         FROM overtime_records r
         JOIN employees e ON e.id = r.employee_id
         WHERE r.start_time >= ?1
           AND r.start_time < ?2
           AND (?3 IS NULL OR r.employee_id = ?3)
         ORDER BY r.start_time ASC, r.id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            from.format(TIMESTAMP_FMT).to_string(),
            to.format(TIMESTAMP_FMT).to_string(),
            employee_id,
        ],
        map_record,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn parse_stored_timestamp(raw: &str, col: usize) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            col,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(raw.to_string())),
        )
    })
}

pub fn map_record(row: &Row) -> Result<OvertimeRecord> {
    let start_raw: String = row.get("start_time")?;
    let end_raw: String = row.get("end_time")?;
    let hours: f64 = row.get("hours")?;

    Ok(OvertimeRecord {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        employee_name: row.get("employee_name")?,
        start: parse_stored_timestamp(&start_raw, 4)?,
        end: parse_stored_timestamp(&end_raw, 5)?,
        break_minutes: row.get::<_, Option<i64>>("break_minutes")?.unwrap_or(0),
        note: row.get::<_, Option<String>>("note")?.unwrap_or_default(),
        created_at: row.get("created_at")?,
        hours_extra: OvertimeValue::from_stored(hours),
    })
}
