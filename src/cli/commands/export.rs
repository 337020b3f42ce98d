use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::{current_month, parse_month};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        employee,
        force,
    } = cmd
    {
        let month = match month {
            Some(m) => parse_month(m)?,
            None => current_month(),
        };
        let pool = DbPool::open(&cfg.database)?;
        ExportLogic::export(&pool, *format, file, *employee, month, *force)?;
    }
    Ok(())
}
