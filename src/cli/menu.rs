//! Interactive menu: one action at a time, back to the menu after each one.

use crate::cli::commands::list::print_blocks;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::employee::EmployeeLogic;
use crate::core::list::ListLogic;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{error, info};
use crate::utils::date::parse_month;
use crate::utils::time::{parse_break_minutes, parse_id, parse_timestamp};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    AddEmployee,
    AddOvertime,
    ViewOvertime,
    MonthlyReport,
    Exit,
}

const ACTIONS: [(MenuAction, &str); 5] = [
    (MenuAction::AddEmployee, "Add employee"),
    (MenuAction::AddOvertime, "Add overtime"),
    (MenuAction::ViewOvertime, "View my overtime"),
    (MenuAction::MonthlyReport, "Generate monthly report"),
    (MenuAction::Exit, "Exit"),
];

/// Run the menu loop until "Exit" is chosen.
///
/// A failed action is reported and the menu is shown again; only a failure
/// of the menu prompt itself ends the loop with an error.
pub fn run(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database)?;
    let theme = ColorfulTheme::default();
    let labels: Vec<&str> = ACTIONS.iter().map(|(_, label)| *label).collect();

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Select an option")
            .items(&labels)
            .default(0)
            .interact()?;

        let action = ACTIONS.get(choice).map(|(a, _)| *a).unwrap_or(MenuAction::Exit);

        let result = match action {
            MenuAction::AddEmployee => add_employee(&pool, &theme),
            MenuAction::AddOvertime => add_overtime(&pool, &theme),
            MenuAction::ViewOvertime => view_overtime(&pool, &theme),
            MenuAction::MonthlyReport => monthly_report(&pool, cfg, &theme),
            MenuAction::Exit => {
                info("Exiting...");
                return Ok(());
            }
        };

        if let Err(e) = result {
            error(e);
        }
        println!();
    }
}

fn ask(theme: &ColorfulTheme, prompt: &str) -> AppResult<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()?)
}

fn ask_optional(theme: &ColorfulTheme, prompt: &str) -> AppResult<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

fn add_employee(pool: &DbPool, theme: &ColorfulTheme) -> AppResult<()> {
    let name = ask(theme, "Employee name")?;
    EmployeeLogic::register(pool, &name)?;
    Ok(())
}

fn add_overtime(pool: &DbPool, theme: &ColorfulTheme) -> AppResult<()> {
    let employee_id = parse_id(&ask(theme, "Employee id")?)?;
    let start = parse_timestamp(&ask(theme, "Start (YYYY-MM-DD HH:MM)")?)?;
    let end = parse_timestamp(&ask(theme, "End (YYYY-MM-DD HH:MM)")?)?;
    let note = ask_optional(theme, "Note")?;
    let break_minutes = parse_break_minutes(&ask_optional(theme, "Break (minutes)")?)?;

    AddLogic::apply(pool, employee_id, start, end, break_minutes, &note)?;
    Ok(())
}

fn view_overtime(pool: &DbPool, theme: &ColorfulTheme) -> AppResult<()> {
    let employee_id = parse_id(&ask(theme, "Employee id")?)?;
    let month = parse_month(&ask(theme, "Month (YYYY-MM)")?)?;

    let data = ListLogic::monthly(pool, Some(employee_id), month)?;
    print_blocks(&data);
    Ok(())
}

fn monthly_report(pool: &DbPool, cfg: &Config, theme: &ColorfulTheme) -> AppResult<()> {
    let employee_id = parse_id(&ask(theme, "Employee id")?)?;
    let month = parse_month(&ask(theme, "Month (YYYY-MM)")?)?;

    ReportLogic::generate(pool, cfg, employee_id, month, None, None)?;
    Ok(())
}
