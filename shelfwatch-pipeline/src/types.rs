use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Status badges
// ---------------------------------------------------------------------------

/// Buyer inventory status badge. Exactly one badge per item, chosen by the
/// first matching rule in priority order (see `status::item_status`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ItemStatus {
    NoStock,
    Expiring,
    Reorder,
    Overstock,
    Healthy,
}

impl ItemStatus {
    /// Sort rank for the buyer view: most actionable first, dead rows last.
    pub fn priority_rank(&self) -> u8 {
        match self {
            ItemStatus::Reorder => 0,
            ItemStatus::Expiring => 1,
            ItemStatus::Overstock => 2,
            ItemStatus::Healthy => 3,
            ItemStatus::NoStock => 4,
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::NoStock => write!(f, "No Stock"),
            ItemStatus::Expiring => write!(f, "Expiring"),
            ItemStatus::Reorder => write!(f, "Reorder"),
            ItemStatus::Overstock => write!(f, "Overstock"),
            ItemStatus::Healthy => write!(f, "Healthy"),
        }
    }
}

/// Slow-mover action badge, the second and independent rule family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SlowMoverAction {
    NoStock,
    Investigate,
    PromoStopReorder,
    Markdown,
    Watch,
    Monitor,
    Healthy,
}

impl fmt::Display for SlowMoverAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlowMoverAction::NoStock => write!(f, "No Stock"),
            SlowMoverAction::Investigate => write!(f, "Investigate"),
            SlowMoverAction::PromoStopReorder => write!(f, "Promo / Stop Reorder"),
            SlowMoverAction::Markdown => write!(f, "Markdown"),
            SlowMoverAction::Watch => write!(f, "Watch"),
            SlowMoverAction::Monitor => write!(f, "Monitor"),
            SlowMoverAction::Healthy => write!(f, "Healthy"),
        }
    }
}

/// Recommended discount band for slow stock. A pure function of
/// days-of-supply; see `scoring::suggest_discount`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DiscountBand {
    Urgent,
    HighPriority,
    MediumPriority,
    LowPriority,
    NotNeeded,
}

impl fmt::Display for DiscountBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountBand::Urgent => write!(f, "30-50% (Urgent)"),
            DiscountBand::HighPriority => write!(f, "20-30% (High Priority)"),
            DiscountBand::MediumPriority => write!(f, "15-20% (Medium Priority)"),
            DiscountBand::LowPriority => write!(f, "10-15% (Low Priority)"),
            DiscountBand::NotNeeded => write!(f, "No discount needed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Item summary
// ---------------------------------------------------------------------------

/// One classified, aggregated, scored record per item (or grouping key).
///
/// This is the unit every downstream consumer operates on: rendering,
/// export, and purchase-order construction all read from it.
#[derive(Clone, Debug, Serialize)]
pub struct ItemSummary {
    /// Item name, or the composite label when summarizing by group.
    pub key: String,
    /// Representative category, when the input carries one.
    pub category: Option<String>,
    /// Summed on-hand quantity across constituent batches.
    pub on_hand: f64,
    /// Median unit cost across costed batches; absent when the input has no
    /// cost column or no batch cost parsed.
    pub unit_cost: Option<f64>,
    /// Earliest expiration date across constituent batches.
    pub earliest_expiration: Option<NaiveDate>,
    /// Days until the earliest expiration, relative to the as-of date.
    pub days_to_expire: Option<f64>,
    /// Total units sold inside the lookback window.
    pub total_sold: f64,
    /// Units per day over the window.
    pub daily_run_rate: f64,
    /// Units per week (daily run rate × 7).
    pub avg_weekly_sales: f64,
    /// Days of supply at current velocity; `UNKNOWN_DAYS_OF_SUPPLY` when
    /// velocity is zero or undefined.
    pub days_of_supply: f64,
    pub status: ItemStatus,
    pub action: SlowMoverAction,
    /// Slow-mover urgency in [0, 100], one decimal place.
    pub slow_mover_score: f64,
    pub discount_band: DiscountBand,
    /// Half of aggregated unit cost; 0 when cost is absent.
    pub suggested_po_price: f64,
}
