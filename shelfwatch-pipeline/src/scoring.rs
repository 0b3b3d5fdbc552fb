//! Slow-mover scoring, discount bands, and the PO price heuristic.

use crate::types::DiscountBand;

/// Days of supply at which the slow-mover score saturates at 100.
pub const SLOW_MOVER_SCORE_CEILING_DOH: f64 = 180.0;

/// Slow-mover urgency score in [0, 100], one decimal place.
///
/// Zero weekly sales is maximal urgency by definition. Otherwise the score
/// ramps linearly with days of supply and caps once cover reaches the
/// ceiling: 90 days scores 50.0, 180 or more scores 100.0.
pub fn slow_mover_score(days_of_supply: f64, weekly_sales: f64) -> f64 {
    if weekly_sales <= 0.0 {
        return 100.0;
    }
    let ramp = (days_of_supply / SLOW_MOVER_SCORE_CEILING_DOH).min(1.0) * 100.0;
    (ramp * 10.0).round() / 10.0
}

/// Recommended discount band from days of supply.
///
/// Same strict-inequality, first-match-wins ladder as the slow-mover action
/// chain; the two share their 180/120/90/60 steps and should stay in sync
/// if thresholds ever move.
pub fn suggest_discount(days_of_supply: f64) -> DiscountBand {
    if days_of_supply > 180.0 {
        DiscountBand::Urgent
    } else if days_of_supply > 120.0 {
        DiscountBand::HighPriority
    } else if days_of_supply > 90.0 {
        DiscountBand::MediumPriority
    } else if days_of_supply > 60.0 {
        DiscountBand::LowPriority
    } else {
        DiscountBand::NotNeeded
    }
}

/// Suggested purchase-order unit price: half of aggregated cost, 0 when the
/// cost is absent. The halving is a fixed business rule, not configurable.
pub fn suggested_po_price(unit_cost: Option<f64>) -> f64 {
    match unit_cost {
        Some(cost) => cost / 2.0,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfwatch_tabular::coerce::to_number;

    #[test]
    fn zero_velocity_scores_maximal() {
        assert_eq!(slow_mover_score(999.0, 0.0), 100.0);
        assert_eq!(slow_mover_score(10.0, 0.0), 100.0);
    }

    #[test]
    fn score_ramp_endpoints() {
        assert_eq!(slow_mover_score(0.0, 1.0), 0.0);
        assert_eq!(slow_mover_score(90.0, 1.0), 50.0);
        assert_eq!(slow_mover_score(180.0, 1.0), 100.0);
        assert_eq!(slow_mover_score(360.0, 1.0), 100.0);
    }

    #[test]
    fn score_rounds_to_one_decimal() {
        // 120 / 180 * 100 = 66.666... -> 66.7
        assert_eq!(slow_mover_score(120.0, 1.0), 66.7);
    }

    #[test]
    fn discount_ladder_is_strict() {
        assert_eq!(suggest_discount(200.0), DiscountBand::Urgent);
        assert_eq!(suggest_discount(180.0), DiscountBand::HighPriority);
        assert_eq!(suggest_discount(130.0), DiscountBand::HighPriority);
        assert_eq!(suggest_discount(120.0), DiscountBand::MediumPriority);
        assert_eq!(suggest_discount(95.0), DiscountBand::MediumPriority);
        assert_eq!(suggest_discount(90.0), DiscountBand::LowPriority);
        assert_eq!(suggest_discount(65.0), DiscountBand::LowPriority);
        assert_eq!(suggest_discount(60.0), DiscountBand::NotNeeded);
        assert_eq!(suggest_discount(30.0), DiscountBand::NotNeeded);
    }

    #[test]
    fn discount_labels_match_buyer_copy() {
        assert_eq!(DiscountBand::Urgent.to_string(), "30-50% (Urgent)");
        assert_eq!(DiscountBand::NotNeeded.to_string(), "No discount needed");
    }

    #[test]
    fn po_price_is_half_of_cost() {
        assert_eq!(suggested_po_price(Some(20.0)), 10.0);
        assert_eq!(suggested_po_price(to_number("14.50")), 7.25);
    }

    #[test]
    fn po_price_of_missing_or_invalid_cost_is_zero() {
        assert_eq!(suggested_po_price(None), 0.0);
        assert_eq!(suggested_po_price(to_number("n/a")), 0.0);
        assert_eq!(suggested_po_price(to_number("")), 0.0);
        assert_eq!(suggested_po_price(to_number("NaN")), 0.0);
    }
}
