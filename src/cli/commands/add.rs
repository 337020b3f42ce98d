use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::time::{parse_break_minutes, parse_timestamp};

/// Record one overtime interval.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        employee,
        start,
        end,
        break_minutes,
        note,
    } = cmd
    {
        // all input is validated before the store is touched
        let start = parse_timestamp(start)?;
        let end = parse_timestamp(end)?;
        let break_minutes = parse_break_minutes(break_minutes)?;

        let pool = DbPool::open(&cfg.database)?;
        AddLogic::apply(&pool, *employee, start, end, break_minutes, note)?;
    }
    Ok(())
}
