use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::open_store;
use crate::errors::AppResult;
use crate::models::ChargingRecord;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_delta, colorize_optional};
use crate::utils::formatting::{hours, km, km_delta, money};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        oldest_first,
        full_ids,
    } = cmd
    {
        let store = open_store(&cfg.database)?;
        let records = store.records();

        if records.is_empty() {
            info("No charging records yet. Add one with `chargelog add`.");
            return Ok(());
        }

        let newest_first = cfg.newest_first && !*oldest_first;

        let ordered: Vec<&ChargingRecord> = if newest_first {
            records.iter().rev().collect()
        } else {
            records.iter().collect()
        };

        header(format!("Charging records ({})", records.len()));
        print!("{}", build_table(&ordered, *full_ids).render());

        let total_cost: f64 = records.iter().map(|r| r.charging_cost).sum();
        println!("\nTotal cost: {}", money(total_cost));
    }
    Ok(())
}

fn build_table(records: &[&ChargingRecord], full_ids: bool) -> Table {
    let mut table = Table::new(vec![
        Column::left("ID"),
        Column::left("Date"),
        Column::right("Added"),
        Column::right("Time"),
        Column::right("Cost"),
        Column::right("Total"),
        Column::left("Notes"),
    ]);

    for r in records {
        let id = if full_ids {
            r.id.to_string()
        } else {
            r.short_id()
        };

        table.add_row(vec![
            id,
            r.date.clone(),
            format!(
                "{}{}{}",
                color_for_delta(r.range_added),
                km_delta(r.range_added),
                RESET
            ),
            hours(&r.charging_time),
            money(r.charging_cost),
            km(r.total_range),
            colorize_optional(&r.notes),
        ]);
    }

    table
}
