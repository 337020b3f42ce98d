use crate::core::list::ListLogic;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ensure_writable, export_csv, export_json, records_to_export};
use crate::ui::messages::warning;
use crate::utils::path::resolve;
use chrono::NaiveDate;

/// High-level logic for exporting a month of records.
pub struct ExportLogic;

impl ExportLogic {
    /// Returns the number of exported records (0 = nothing written).
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        employee_id: Option<i64>,
        month: NaiveDate,
        force: bool,
    ) -> AppResult<usize> {
        let data = ListLogic::monthly(pool, employee_id, month)?;
        if data.records.is_empty() {
            warning("No overtime records found for the selected month. Nothing to export.");
            return Ok(0);
        }

        let path = resolve(file)?;
        ensure_writable(&path, force)?;

        let rows = records_to_export(&data.records);
        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        audit_quiet(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} records → {}", rows.len(), path.display()),
        );

        Ok(rows.len())
    }
}
