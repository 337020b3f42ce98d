use crate::ui::messages::success;
use rusqlite::{Connection, Result, params};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn ensure_employees_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create `overtime_records` with the current schema.
/// `hours` holds the HH.MM value, `break_minutes` may be NULL (read as 0).
fn ensure_overtime_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS overtime_records (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id    INTEGER NOT NULL,
            hours          REAL NOT NULL,
            start_time     TEXT NOT NULL,
            end_time       TEXT NOT NULL,
            note           TEXT DEFAULT '',
            break_minutes  INTEGER DEFAULT 0 CHECK(break_minutes IS NULL OR break_minutes >= 0),
            created_at     TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(employee_id) REFERENCES employees(id)
        );

        CREATE INDEX IF NOT EXISTS idx_overtime_employee_start
            ON overtime_records(employee_id, start_time);
        "#,
    )?;
    Ok(())
}

/// Check whether `table` already has `column`.
fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
        params![table, column],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Add a column to an older `overtime_records` table if it is absent.
/// Returns `true` when the column was added.
fn add_column_if_missing(conn: &Connection, column: &str, definition: &str) -> Result<bool> {
    if table_has_column(conn, "overtime_records", column)? {
        return Ok(false);
    }

    conn.execute_batch(&format!(
        "ALTER TABLE overtime_records ADD COLUMN {} {};",
        column, definition
    ))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![
            format!("overtime_records.{}", column),
            format!("Added '{}' column to overtime_records", column)
        ],
    )?;

    success(format!(
        "Migration applied: added '{}' to overtime_records table",
        column
    ));

    Ok(true)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `db::initialize::init_db()`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    ensure_employees_table(conn)?;
    ensure_overtime_table(conn)?;

    // tables created by early releases lack these two columns
    add_column_if_missing(conn, "note", "TEXT DEFAULT ''")?;
    add_column_if_missing(conn, "break_minutes", "INTEGER DEFAULT 0")?;

    Ok(())
}
