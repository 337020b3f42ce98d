use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::format_total;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::overtime::MonthlyOvertime;
use crate::ui::messages::{detail, header};
use crate::utils::colors::{colorize_hours, colorize_note};
use crate::utils::date::{current_month, month_label, parse_month};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month, employee } = cmd {
        let month = match month {
            Some(m) => parse_month(m)?,
            None => current_month(),
        };

        let pool = DbPool::open(&cfg.database)?;
        let data = ListLogic::monthly(&pool, *employee, month)?;
        print_table(&data);
    }
    Ok(())
}

fn title(data: &MonthlyOvertime) -> String {
    match &data.employee {
        Some(e) => format!(
            "Overtime of {} (id {}) - {}",
            e.name,
            e.id,
            month_label(data.month)
        ),
        None => format!("Overtime - {}", month_label(data.month)),
    }
}

/// Tabular listing, used by `list`.
pub fn print_table(data: &MonthlyOvertime) {
    header(title(data));

    if data.records.is_empty() {
        println!("No overtime found for this month.");
        return;
    }

    let mut table = Table::new(vec![
        Column::numeric("ID", 5),
        Column::new("EMPLOYEE", 16),
        Column::new("START", 16),
        Column::new("END", 16),
        Column::numeric("BREAK", 5),
        Column::numeric("HOURS", 6),
        Column::new("NOTE", 20),
    ]);

    for r in &data.records {
        table.add_row(vec![
            r.id.to_string(),
            r.employee_name.clone(),
            r.start_str(),
            r.end_str(),
            r.break_minutes.to_string(),
            r.hours_extra.to_string(),
            r.note.clone(),
        ]);
    }

    print!("{}", table.render());
    println!();
    detail("Total", colorize_hours(&format_total(data.total_minutes)));
}

/// One block per record, used by the interactive menu.
pub fn print_blocks(data: &MonthlyOvertime) {
    if data.records.is_empty() {
        println!("No overtime found for this employee in this month.");
        return;
    }

    header(title(data));
    for r in &data.records {
        detail("Start", r.start_str());
        detail("End", r.end_str());
        detail("Break", format!("{} min", r.break_minutes));
        detail("Note", colorize_note(&r.note));
        detail("Overtime", colorize_hours(&r.hours_extra.to_string()));
        println!();
    }
    detail("Total", colorize_hours(&format_total(data.total_minutes)));
}
