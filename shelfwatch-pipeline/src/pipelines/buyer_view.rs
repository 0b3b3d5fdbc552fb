//! The buyer view pipeline.
//!
//! End-to-end wiring of the stage modules:
//! 1. resolve both schemas against the raw headers
//! 2. restrict inventory to the configured room, when one is set
//! 3. derive per-item velocity from the sales window
//! 4. roll batches up per item (sum / median / min)
//! 5. left-join velocity, filling missing run rates with 0
//! 6. classify, score, and price every item
//! 7. apply the expiration window
//! 8. rank rows most-actionable-first
//!
//! The pipeline is a pure function of (inventory, sales, configuration):
//! no clock reads, no shared state, and identical inputs produce identical
//! output records. Everything is recomputed from scratch per invocation.

use chrono::NaiveDate;

use shelfwatch_tabular::{RawTable, SchemaResult};

use crate::aggregate::{aggregate_batches, AggregateRow, SummaryKey};
use crate::doh::days_of_supply;
use crate::expiry::{days_to_expire, filter_by_expiration, ExpirationWindow};
use crate::kpi::{summarize, KpiSummary};
use crate::room_filter::filter_room;
use crate::schema::{InventorySchema, SalesSchema};
use crate::scoring::{slow_mover_score, suggest_discount, suggested_po_price};
use crate::status::{item_status, slow_mover_action};
use crate::types::ItemSummary;
use crate::velocity::{compute_velocity, velocity_index, VelocityRecord};

/// Pipeline configuration. All inputs to classification live here so the
/// pipeline stays a pure function; in particular the as-of date is explicit
/// rather than read from a clock inside the engine.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Sales lookback window in days.
    pub window_days: u32,
    /// Room partition to restrict to, e.g. "Vault". `None` keeps all rows.
    pub room: Option<String>,
    /// Expiration window applied to the final table.
    pub expiring: ExpirationWindow,
    /// Reference date for days-to-expire derivation.
    pub as_of: NaiveDate,
}

impl PipelineConfig {
    pub fn new(window_days: u32, as_of: NaiveDate) -> Self {
        Self {
            window_days,
            room: None,
            expiring: ExpirationWindow::Any,
            as_of,
        }
    }

    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    pub fn with_expiring(mut self, window: ExpirationWindow) -> Self {
        self.expiring = window;
        self
    }
}

/// The classified, scored, ranked output table plus its KPI block.
#[derive(Clone, Debug)]
pub struct BuyerView {
    pub items: Vec<ItemSummary>,
    pub kpis: KpiSummary,
    /// Rows kept by the room filter (all rows when no filter is set).
    pub rows_included: usize,
    /// Rows excluded by the room filter.
    pub rows_excluded: usize,
    /// Whether the input carried a cost column.
    pub has_cost: bool,
    /// Whether the input carried an expiration column.
    pub has_expiration: bool,
}

/// Synchronous single-pass pipeline over in-memory tables.
pub struct BuyerViewPipeline {
    config: PipelineConfig,
}

impl BuyerViewPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full classification pipeline.
    ///
    /// Fails only on schema errors (a required column or the requested room
    /// partition column cannot be located); every numeric edge case inside
    /// degrades to its documented fallback, so a resolvable input always
    /// yields a fully-typed table.
    pub fn execute(&self, inventory: &RawTable, sales: &RawTable) -> SchemaResult<BuyerView> {
        let schema = InventorySchema::resolve(inventory)?;
        let sales_schema = SalesSchema::resolve(sales)?;

        let batches = schema.read_rows(inventory);
        let total_rows = batches.len();

        let (batches, rows_included, rows_excluded) = match self.config.room.as_deref() {
            Some(room) => {
                let outcome = filter_room(&schema, batches, room)?;
                log::info!(
                    "room filter '{}' kept {} of {} rows",
                    room,
                    outcome.included(),
                    total_rows
                );
                let included = outcome.included();
                let excluded = outcome.excluded();
                (outcome.kept, included, excluded)
            }
            None => (batches, total_rows, 0),
        };

        let sales_rows = sales_schema.read_rows(sales);
        let velocity = compute_velocity(&sales_rows, self.config.window_days);
        log::debug!(
            "velocity over {} days for {} distinct items",
            self.config.window_days,
            velocity.len()
        );

        let aggregated = aggregate_batches(&batches, SummaryKey::Item, schema.has_cost());
        let index = velocity_index(&velocity);

        let items: Vec<ItemSummary> = aggregated
            .into_iter()
            .map(|agg| {
                let vel = index.get(agg.key.as_str()).copied();
                self.summarize_item(agg, vel)
            })
            .collect();

        let items = filter_by_expiration(items, self.config.expiring, schema.has_expiration());
        let items = rank(items);
        let kpis = summarize(&items);
        log::info!(
            "classified {} items ({} reorder, {} overstock, {} expiring)",
            items.len(),
            kpis.reorder_count,
            kpis.overstock_count,
            kpis.expiring_count
        );

        Ok(BuyerView {
            items,
            kpis,
            rows_included,
            rows_excluded,
            has_cost: schema.has_cost(),
            has_expiration: schema.has_expiration(),
        })
    }

    /// Join one aggregated group with its velocity record and derive every
    /// classified field. Items absent from the velocity table join with a
    /// run rate of 0, not as missing data.
    fn summarize_item(&self, agg: AggregateRow, vel: Option<&VelocityRecord>) -> ItemSummary {
        let total_sold = vel.map_or(0.0, |v| v.total_sold);
        let daily_run_rate = vel.map_or(0.0, |v| v.daily_run_rate);
        let avg_weekly_sales = vel.map_or(0.0, |v| v.avg_weekly_sales);

        let doh = days_of_supply(agg.on_hand, daily_run_rate);
        let days_exp = days_to_expire(agg.earliest_expiration, self.config.as_of);

        ItemSummary {
            status: item_status(agg.on_hand, doh, days_exp),
            action: slow_mover_action(doh, avg_weekly_sales, agg.on_hand),
            slow_mover_score: slow_mover_score(doh, avg_weekly_sales),
            discount_band: suggest_discount(doh),
            suggested_po_price: suggested_po_price(agg.unit_cost),
            key: agg.key,
            category: agg.category,
            on_hand: agg.on_hand,
            unit_cost: agg.unit_cost,
            earliest_expiration: agg.earliest_expiration,
            days_to_expire: days_exp,
            total_sold,
            daily_run_rate,
            avg_weekly_sales,
            days_of_supply: doh,
        }
    }
}

/// Order the table most-actionable-first: badge priority rank, then weekly
/// velocity descending inside a rank. The sort is stable, so equal keys
/// keep their aggregation order and reruns agree byte-for-byte.
fn rank(mut items: Vec<ItemSummary>) -> Vec<ItemSummary> {
    items.sort_by(|a, b| {
        a.status
            .priority_rank()
            .cmp(&b.status.priority_rank())
            .then_with(|| {
                b.avg_weekly_sales
                    .partial_cmp(&a.avg_weekly_sales)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });
    items
}

/// Convenience entry point for collaborators that only need the records:
/// `(inventory, sales, window, room?) -> classified item summaries`.
pub fn classify_inventory(
    inventory: &RawTable,
    sales: &RawTable,
    window_days: u32,
    room: Option<&str>,
    as_of: NaiveDate,
) -> SchemaResult<Vec<ItemSummary>> {
    let mut config = PipelineConfig::new(window_days, as_of);
    if let Some(room) = room {
        config = config.with_room(room);
    }
    Ok(BuyerViewPipeline::new(config).execute(inventory, sales)?.items)
}
