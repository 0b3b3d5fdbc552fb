//! Days-of-supply derivation.

/// Sentinel meaning "velocity undefined": an item with no measurable sales
/// rate has effectively infinite days of supply. Using a large finite value
/// lets zero-velocity items sort and classify as overstocked/slow instead of
/// poisoning downstream comparisons. Comparisons against this value are
/// explicit (`>= UNKNOWN_DAYS_OF_SUPPLY`), never implicit threshold overlap.
pub const UNKNOWN_DAYS_OF_SUPPLY: f64 = 999.0;

/// Days of stock cover at the current velocity.
///
/// Items absent from the velocity table join with a run rate of 0 and land
/// here the same as items that genuinely sold nothing.
pub fn days_of_supply(on_hand: f64, daily_run_rate: f64) -> f64 {
    if daily_run_rate > 0.0 {
        on_hand / daily_run_rate
    } else {
        UNKNOWN_DAYS_OF_SUPPLY
    }
}
