use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { action } = cmd {
        let pool = DbPool::open(&cfg.database)?;

        match action {
            EmployeeAction::Add { name } => {
                EmployeeLogic::register(&pool, name)?;
            }
            EmployeeAction::List => {
                let employees = EmployeeLogic::all(&pool)?;
                if employees.is_empty() {
                    println!("No employees registered.");
                    return Ok(());
                }

                let mut table = Table::new(vec![Column::numeric("ID", 6), Column::new("NAME", 30)]);
                for e in employees {
                    table.add_row(vec![e.id.to_string(), e.name]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
