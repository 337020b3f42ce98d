//! Monthly overtime report rendered as a paginated PDF.

pub mod logo;
pub mod pdf;

use crate::core::calculator::format_total;
use crate::errors::{AppError, AppResult};
use crate::models::overtime::MonthlyOvertime;
use crate::utils::date::{month_key, month_label};
use crate::utils::time::REPORT_TIMESTAMP_FMT;
use pdf::{BlockLine, PdfManager};
use std::path::Path;

/// Printed width of the logo, in points (≈ 50 mm).
const LOGO_WIDTH: f32 = 142.0;

/// Default file name, e.g. `overtime_report_1_2024-03.pdf` for employee 1.
pub fn default_file_name(data: &MonthlyOvertime) -> String {
    match &data.employee {
        Some(e) => format!("overtime_report_{}_{}.pdf", e.id, month_key(data.month)),
        None => format!("overtime_report_{}.pdf", month_key(data.month)),
    }
}

/// Lay out the report in memory. The logo is decoded first so a missing or
/// unreadable asset aborts before anything else happens.
pub fn build_pdf(data: &MonthlyOvertime, logo_path: &Path) -> AppResult<PdfManager> {
    let logo = logo::load_logo(logo_path)?;

    let mut doc = PdfManager::new();
    doc.set_logo(&logo, LOGO_WIDTH);
    doc.write_header(&format!("Overtime Report - {}", month_label(data.month)));

    for rec in &data.records {
        let lines = [
            BlockLine::text(format!("Employee: {}", rec.employee_name)),
            BlockLine::text(format!("Start: {}", rec.start.format(REPORT_TIMESTAMP_FMT))),
            BlockLine::text(format!("End: {}", rec.end.format(REPORT_TIMESTAMP_FMT))),
            BlockLine::text(format!("Break: {} min", rec.break_minutes)),
            BlockLine::text(format!("Note: {}", rec.note)),
            BlockLine::valued("Overtime:", rec.hours_extra.to_string()),
        ];
        doc.write_block(&lines, 14.0);
    }

    doc.write_total(&BlockLine::valued("Total overtime:", format_total(data.total_minutes)));

    Ok(doc)
}

/// Render `data` to `out_path`.
pub fn render_pdf(data: &MonthlyOvertime, logo_path: &Path, out_path: &Path) -> AppResult<()> {
    let doc = build_pdf(data, logo_path)?;
    doc.save(out_path)
        .map_err(|e| AppError::Export(format!("PDF write error ({}): {}", out_path.display(), e)))
}
