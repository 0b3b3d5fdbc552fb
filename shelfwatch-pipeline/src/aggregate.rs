//! Batch-to-group rollup.
//!
//! Each metric has its own reducer: quantity sums (physical stock is
//! additive), cost takes the median (one oddly priced lot should not move
//! the typical replenishment cost), expiration takes the minimum (the
//! earliest-expiring lot sets the urgency no matter how much stock sits
//! behind it).

use chrono::NaiveDate;

use crate::schema::BatchRow;

/// Granularity of the rollup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryKey {
    /// One group per distinct item name.
    Item,
    /// One group per category + strain + package size combination.
    CategoryStrainSize,
}

/// One rolled-up group of batches.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregateRow {
    pub key: String,
    /// Representative category: the first non-empty category among the
    /// group's batches, in input order.
    pub category: Option<String>,
    pub on_hand: f64,
    pub unit_cost: Option<f64>,
    pub earliest_expiration: Option<NaiveDate>,
}

fn group_label(row: &BatchRow, key: SummaryKey) -> String {
    match key {
        SummaryKey::Item => row.name.clone(),
        SummaryKey::CategoryStrainSize => {
            let part = |v: &Option<String>| v.as_deref().unwrap_or("(none)").to_string();
            format!(
                "{} / {} / {}",
                part(&row.category),
                part(&row.strain),
                part(&row.package_size)
            )
        }
    }
}

/// Median of a set of observed costs. Even-sized sets average the middle
/// pair, matching the usual statistical definition.
fn median(values: &mut Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).expect("costs are finite"));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}

/// Roll batches up to one row per group key.
///
/// `has_cost` reports whether the source carried a cost column at all; when
/// it did not, the aggregated rows omit cost entirely rather than synthesize
/// a zero. Absence propagates, it is not coerced. Output is sorted by key.
pub fn aggregate_batches(rows: &[BatchRow], key: SummaryKey, has_cost: bool) -> Vec<AggregateRow> {
    // Group in first-seen order, then sort the final rows by key so the
    // output is deterministic for identical inputs.
    let mut order: Vec<String> = Vec::new();
    let mut groups: std::collections::HashMap<String, Vec<&BatchRow>> =
        std::collections::HashMap::new();

    for row in rows {
        let label = group_label(row, key);
        groups
            .entry(label.clone())
            .or_insert_with(|| {
                order.push(label);
                Vec::new()
            })
            .push(row);
    }

    let mut aggregated: Vec<AggregateRow> = order
        .into_iter()
        .map(|label| {
            let members = &groups[&label];
            let on_hand: f64 = members.iter().map(|r| r.on_hand).sum();
            let unit_cost = if has_cost {
                let mut costs: Vec<f64> = members.iter().filter_map(|r| r.unit_cost).collect();
                median(&mut costs)
            } else {
                None
            };
            let earliest_expiration = members.iter().filter_map(|r| r.expiration).min();
            let category = members
                .iter()
                .find_map(|r| r.category.clone());

            AggregateRow {
                key: label,
                category,
                on_hand,
                unit_cost,
                earliest_expiration,
            }
        })
        .collect();

    aggregated.sort_by(|a, b| a.key.cmp(&b.key));
    aggregated
}

/// Median over arbitrary values, for dataset-level stats. Shares the
/// even/odd handling with the cost reducer.
pub(crate) fn median_of(mut values: Vec<f64>) -> Option<f64> {
    median(&mut values)
}
