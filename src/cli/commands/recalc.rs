use crate::cli::commands::open_reporting_store;
use crate::config::Config;
use crate::core::recalc::RecalcLogic;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = open_reporting_store(cfg)?;
    RecalcLogic::apply(&mut store)?;
    Ok(())
}
