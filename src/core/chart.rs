//! Charging-efficiency chart.
//!
//! For each pair of consecutive records (current, next) the chart plots
//! `next.range_added / current.charging_time` against the position of
//! `current` within the logged period (0..100 %).

use crate::models::ChargingRecord;
use crate::utils::date::calendar_date;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: String,
    /// Days since the first record, as a percentage of the whole span.
    pub progress: f64,
    /// Range added per hour of charging.
    pub efficiency: f64,
}

/// Charging time in hours; anything that is not a positive number counts as 1.
fn hours_or_one(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(h) if h > 0.0 && h.is_finite() => h,
        _ => 1.0,
    }
}

/// Build the efficiency series. Records whose date does not resolve to a
/// calendar day are left out; fewer than two usable records give no points.
pub fn efficiency_points(records: &[ChargingRecord]) -> Vec<ChartPoint> {
    let mut dated: Vec<(NaiveDate, &ChargingRecord)> = records
        .iter()
        .filter_map(|r| calendar_date(&r.date).map(|d| (d, r)))
        .collect();

    if dated.len() < 2 {
        return Vec::new();
    }

    dated.sort_by_key(|(_, r)| r.sort_key());

    let first = dated[0].0;
    let last = dated[dated.len() - 1].0;
    let total_days = ((last - first).num_days() as f64).max(1.0);

    dated
        .windows(2)
        .map(|pair| {
            let (day, current) = pair[0];
            let (_, next) = pair[1];
            let days_from_start = (day - first).num_days() as f64;

            ChartPoint {
                date: current.date.clone(),
                progress: days_from_start / total_days * 100.0,
                efficiency: next.range_added as f64 / hours_or_one(&current.charging_time),
            }
        })
        .collect()
}

/// One block character per point, scaled between the series min and max.
pub fn sparkline(points: &[ChartPoint]) -> String {
    let min = points.iter().map(|p| p.efficiency).fold(f64::INFINITY, f64::min);
    let max = points
        .iter()
        .map(|p| p.efficiency)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    points
        .iter()
        .map(|p| {
            if span <= f64::EPSILON {
                BARS[BARS.len() / 2]
            } else {
                let idx = ((p.efficiency - min) / span * (BARS.len() - 1) as f64).round() as usize;
                BARS[idx.min(BARS.len() - 1)]
            }
        })
        .collect()
}

/// Full text rendering: table of points followed by the sparkline.
/// `None` when there is not enough data.
pub fn render(points: &[ChartPoint]) -> Option<String> {
    if points.is_empty() {
        return None;
    }

    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::right("Progress"),
        Column::right("km/h"),
    ]);

    for p in points {
        table.add_row(vec![
            p.date.clone(),
            format!("{:.0}%", p.progress),
            format!("{:.2}", p.efficiency),
        ]);
    }

    let mut out = table.render();
    out.push('\n');
    out.push_str(&sparkline(points));
    out.push('\n');
    Some(out)
}
