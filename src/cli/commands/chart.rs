use crate::config::Config;
use crate::core::chart::{efficiency_points, render};
use crate::core::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(&cfg.database)?;
    let points = efficiency_points(store.records());

    header("Charging efficiency (range added per charging hour)");

    match render(&points) {
        Some(chart) => print!("{}", chart),
        None => warning("Not enough data to draw the chart (need at least two dated records)."),
    }

    Ok(())
}
