//! Sales velocity over a lookback window.

use std::collections::HashMap;

use crate::schema::SalesRow;

/// Derived sales velocity for one distinct item name.
#[derive(Clone, Debug, PartialEq)]
pub struct VelocityRecord {
    pub name: String,
    pub total_sold: f64,
    pub daily_run_rate: f64,
    pub avg_weekly_sales: f64,
}

/// Aggregate sales rows into one velocity record per distinct item name.
///
/// The window length is clamped to at least 1 day, a deliberate floor to
/// keep the rate defined rather than a sentinel. For fixed total sold, the daily
/// run rate scales inversely with the window: half the window, double the
/// rate. Output is sorted by item name.
pub fn compute_velocity(sales: &[SalesRow], window_days: u32) -> Vec<VelocityRecord> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for sale in sales {
        *totals.entry(sale.name.as_str()).or_insert(0.0) += sale.qty;
    }

    let days = window_days.max(1) as f64;
    let mut records: Vec<VelocityRecord> = totals
        .into_iter()
        .map(|(name, total_sold)| {
            let daily_run_rate = total_sold / days;
            VelocityRecord {
                name: name.to_string(),
                total_sold,
                daily_run_rate,
                avg_weekly_sales: daily_run_rate * 7.0,
            }
        })
        .collect();
    records.sort_by(|a, b| a.name.cmp(&b.name));
    records
}

/// Index velocity records by item name for the inventory join.
pub fn velocity_index(records: &[VelocityRecord]) -> HashMap<&str, &VelocityRecord> {
    records.iter().map(|r| (r.name.as_str(), r)).collect()
}
