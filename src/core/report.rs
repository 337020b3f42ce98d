use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::report::{default_file_name, render_pdf};
use crate::ui::messages::{success, warning};
use crate::utils::date::month_label;
use crate::utils::path::resolve;
use chrono::NaiveDate;
use std::path::PathBuf;

pub struct ReportLogic;

impl ReportLogic {
    /// Generate the monthly PDF report for one employee.
    ///
    /// `file` and `logo` override the configured output directory and logo.
    /// Returns the path of the written report.
    pub fn generate(
        pool: &DbPool,
        cfg: &Config,
        employee_id: i64,
        month: NaiveDate,
        file: Option<&str>,
        logo: Option<&str>,
    ) -> AppResult<PathBuf> {
        let data = ListLogic::monthly(pool, Some(employee_id), month)?;

        if data.records.is_empty() {
            warning(format!(
                "No overtime found for employee {} in {}: the report will only show the total.",
                employee_id,
                month_label(month)
            ));
        }

        let logo_path = resolve(logo.unwrap_or(&cfg.logo_path))?;
        let out_path = match file {
            Some(f) => resolve(f)?,
            None => resolve(&cfg.report_dir)?.join(default_file_name(&data)),
        };

        render_pdf(&data, &logo_path, &out_path)?;

        audit_quiet(
            &pool.conn,
            "report",
            &employee_id.to_string(),
            &format!("Monthly report {} → {}", month_label(month), out_path.display()),
        );
        success(format!("PDF report generated: {}", out_path.display()));

        Ok(out_path)
    }
}
