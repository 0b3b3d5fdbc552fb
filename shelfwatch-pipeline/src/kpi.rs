//! Dataset-level KPI tiles.

use std::collections::HashMap;

use serde::Serialize;

use crate::aggregate::median_of;
use crate::doh::UNKNOWN_DAYS_OF_SUPPLY;
use crate::types::{ItemStatus, ItemSummary};

/// Days of supply above which (strictly) an item counts as a slow mover
/// for the KPI tile, matching the slow-mover Monitor rung.
pub const SLOW_MOVER_DEFAULT_DOH_THRESHOLD: f64 = 60.0;

/// Headline numbers over the classified item table.
#[derive(Clone, Debug, Serialize)]
pub struct KpiSummary {
    pub skus_in_stock: usize,
    /// Σ on-hand × unit cost over rows that carry a cost.
    pub dollars_on_hand: f64,
    pub reorder_count: usize,
    pub overstock_count: usize,
    pub expiring_count: usize,
    /// Rows with more cover than the slow-mover threshold (strict).
    pub slow_mover_count: usize,
    /// Median days of supply with unknown-velocity sentinels dropped;
    /// absent when no row has a measurable velocity.
    pub median_days_of_supply: Option<f64>,
    /// Category holding the most units, when categories are present.
    pub worst_category: Option<String>,
}

/// Compute the KPI block for a classified item table.
pub fn summarize(items: &[ItemSummary]) -> KpiSummary {
    let count_status = |status: ItemStatus| items.iter().filter(|i| i.status == status).count();

    // Drop the sentinel explicitly rather than thresholding: a genuine
    // (if extreme) days-of-supply above 999 still belongs in the median.
    let known_doh: Vec<f64> = items
        .iter()
        .map(|i| i.days_of_supply)
        .filter(|&d| d != UNKNOWN_DAYS_OF_SUPPLY)
        .collect();

    let mut units_by_category: HashMap<&str, f64> = HashMap::new();
    for item in items {
        if let Some(category) = item.category.as_deref() {
            *units_by_category.entry(category).or_insert(0.0) += item.on_hand;
        }
    }
    let worst_category = units_by_category
        .into_iter()
        .max_by(|a, b| {
            // Largest unit total wins; ties break toward the earlier name
            // so repeated runs agree.
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.0.cmp(a.0))
        })
        .map(|(name, _)| name.to_string());

    KpiSummary {
        skus_in_stock: items.iter().filter(|i| i.on_hand > 0.0).count(),
        dollars_on_hand: items
            .iter()
            .filter_map(|i| i.unit_cost.map(|c| i.on_hand * c))
            .sum(),
        reorder_count: count_status(ItemStatus::Reorder),
        overstock_count: count_status(ItemStatus::Overstock),
        expiring_count: count_status(ItemStatus::Expiring),
        slow_mover_count: items
            .iter()
            .filter(|i| i.days_of_supply > SLOW_MOVER_DEFAULT_DOH_THRESHOLD)
            .count(),
        median_days_of_supply: median_of(known_doh),
        worst_category,
    }
}
