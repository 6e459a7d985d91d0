use crate::db::pool::DbPool;
use crate::db::queries::{count_records, load_records};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL RECORDS
    //
    let count = count_records(&pool.conn)?;
    println!(
        "{}• Total records:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DATE RANGE (imports keep file order, so go by sort key)
    //
    let records = load_records(&pool.conn)?;

    let fmt_first = records
        .iter()
        .min_by_key(|r| r.sort_key())
        .map(|r| r.date.clone())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = records
        .iter()
        .max_by_key(|r| r.sort_key())
        .map(|r| r.date.clone())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) TOTALS
    //
    if !records.is_empty() {
        let total_cost: f64 = records.iter().map(|r| r.charging_cost).sum();
        let total_added: i64 = records.iter().map(|r| r.range_added).sum();

        println!("{}• Total cost:{} {:.2}", CYAN, RESET, total_cost);
        println!("{}• Total range added:{} {} km", CYAN, RESET, total_added);

        if total_added > 0 {
            println!(
                "{}• Average cost/km:{} {:.3}",
                CYAN,
                RESET,
                total_cost / total_added as f64
            );
        }
    }

    println!();
    Ok(())
}
