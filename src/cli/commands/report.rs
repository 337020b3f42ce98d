use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::parse_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        employee,
        month,
        file,
        logo,
    } = cmd
    {
        let month = parse_month(month)?;
        let pool = DbPool::open(&cfg.database)?;
        ReportLogic::generate(
            &pool,
            cfg,
            *employee,
            month,
            file.as_deref(),
            logo.as_deref(),
        )?;
    }
    Ok(())
}
