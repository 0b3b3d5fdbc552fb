//! Status classification.
//!
//! Two independent rule families, each evaluated as an ordered chain where
//! the first satisfied rule determines the badge and later rules are never
//! consulted. Order encodes override priority: an item with huge on-hand
//! cover still reads "Expiring" when its earliest lot is close to date.
//!
//! The buyer family uses inclusive bounds at 21 and 90; the slow-mover
//! family is strict greater-than at every step. The asymmetry is load-bearing
//! and must survive any threshold change.

use crate::doh::UNKNOWN_DAYS_OF_SUPPLY;
use crate::types::{ItemStatus, SlowMoverAction};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Days of supply at or below which an in-stock item needs a reorder.
pub const INVENTORY_REORDER_DOH_THRESHOLD: f64 = 21.0;
/// Days of supply at or above which an item counts as overstocked.
pub const INVENTORY_OVERSTOCK_DOH_THRESHOLD: f64 = 90.0;
/// Days-to-expire below which (strictly) an item is flagged as expiring.
pub const INVENTORY_EXPIRING_SOON_DAYS: f64 = 60.0;

/// Slow-mover chain steps, strict greater-than in descending order.
pub const SLOW_MOVER_PROMO_DOH: f64 = 180.0;
pub const SLOW_MOVER_MARKDOWN_DOH: f64 = 120.0;
pub const SLOW_MOVER_WATCH_DOH: f64 = 90.0;
pub const SLOW_MOVER_MONITOR_DOH: f64 = 60.0;

// ---------------------------------------------------------------------------
// Rule chains
// ---------------------------------------------------------------------------

/// Buyer inventory status.
///
/// Boundary semantics: DOH exactly 21 is Reorder (inclusive), DOH exactly 90
/// is Overstock (inclusive), days-to-expire exactly 60 is NOT expiring
/// (strict less-than).
pub fn item_status(on_hand: f64, days_of_supply: f64, days_to_expire: Option<f64>) -> ItemStatus {
    if on_hand <= 0.0 {
        return ItemStatus::NoStock;
    }
    if let Some(days) = days_to_expire {
        if days < INVENTORY_EXPIRING_SOON_DAYS {
            return ItemStatus::Expiring;
        }
    }
    if days_of_supply > 0.0 && days_of_supply <= INVENTORY_REORDER_DOH_THRESHOLD {
        return ItemStatus::Reorder;
    }
    if days_of_supply >= INVENTORY_OVERSTOCK_DOH_THRESHOLD {
        return ItemStatus::Overstock;
    }
    ItemStatus::Healthy
}

/// Slow-mover action status.
///
/// Zero weekly sales or an unknown days-of-supply means the velocity data
/// cannot be trusted for a markdown decision, so those items route to
/// Investigate instead of the discount ladder.
pub fn slow_mover_action(
    days_of_supply: f64,
    weekly_sales: f64,
    on_hand: f64,
) -> SlowMoverAction {
    if on_hand <= 0.0 {
        return SlowMoverAction::NoStock;
    }
    if weekly_sales <= 0.0 || days_of_supply >= UNKNOWN_DAYS_OF_SUPPLY {
        return SlowMoverAction::Investigate;
    }
    if days_of_supply > SLOW_MOVER_PROMO_DOH {
        return SlowMoverAction::PromoStopReorder;
    }
    if days_of_supply > SLOW_MOVER_MARKDOWN_DOH {
        return SlowMoverAction::Markdown;
    }
    if days_of_supply > SLOW_MOVER_WATCH_DOH {
        return SlowMoverAction::Watch;
    }
    if days_of_supply > SLOW_MOVER_MONITOR_DOH {
        return SlowMoverAction::Monitor;
    }
    SlowMoverAction::Healthy
}
