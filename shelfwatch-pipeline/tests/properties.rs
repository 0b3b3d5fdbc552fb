//! Property checks for the numeric laws the classifiers depend on.

use proptest::prelude::*;

use shelfwatch_pipeline::doh::{days_of_supply, UNKNOWN_DAYS_OF_SUPPLY};
use shelfwatch_pipeline::schema::SalesRow;
use shelfwatch_pipeline::scoring::{slow_mover_score, suggest_discount};
use shelfwatch_pipeline::status::{item_status, slow_mover_action};
use shelfwatch_pipeline::types::{DiscountBand, ItemStatus, SlowMoverAction};
use shelfwatch_pipeline::velocity::compute_velocity;

/// Urgency order of the discount ladder, for monotonicity checks.
fn discount_rank(band: DiscountBand) -> u8 {
    match band {
        DiscountBand::NotNeeded => 0,
        DiscountBand::LowPriority => 1,
        DiscountBand::MediumPriority => 2,
        DiscountBand::HighPriority => 3,
        DiscountBand::Urgent => 4,
    }
}

proptest! {
    #[test]
    fn nonpositive_rate_always_yields_the_sentinel(
        on_hand in 0.0..1e6f64,
        rate in -100.0..=0.0f64,
    ) {
        prop_assert_eq!(days_of_supply(on_hand, rate), UNKNOWN_DAYS_OF_SUPPLY);
    }

    #[test]
    fn velocity_rate_times_window_recovers_total(
        total in 0.1..1e5f64,
        window in 1u32..730,
    ) {
        let sales = vec![SalesRow { name: "A".into(), qty: total }];
        let rate = compute_velocity(&sales, window)[0].daily_run_rate;
        prop_assert!((rate * window as f64 - total).abs() < 1e-9 * total);
    }

    #[test]
    fn halving_the_window_doubles_the_rate(
        total in 0.1..1e5f64,
        half_window in 1u32..365,
    ) {
        let sales = vec![SalesRow { name: "A".into(), qty: total }];
        let narrow = compute_velocity(&sales, half_window)[0].daily_run_rate;
        let wide = compute_velocity(&sales, half_window * 2)[0].daily_run_rate;
        prop_assert!((narrow - wide * 2.0).abs() < 1e-9 * narrow.abs().max(1.0));
    }

    #[test]
    fn discount_urgency_is_monotone_in_days_of_supply(
        a in 0.0..1000.0f64,
        b in 0.0..1000.0f64,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(discount_rank(suggest_discount(lo)) <= discount_rank(suggest_discount(hi)));
    }

    #[test]
    fn score_stays_inside_its_bounds(
        doh in 0.0..5000.0f64,
        weekly in 0.0..1000.0f64,
    ) {
        let score = slow_mover_score(doh, weekly);
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn out_of_stock_overrides_both_families(
        on_hand in -100.0..=0.0f64,
        doh in 0.0..2000.0f64,
        weekly in 0.0..100.0f64,
        days_exp in proptest::option::of(0.0..365.0f64),
    ) {
        prop_assert_eq!(item_status(on_hand, doh, days_exp), ItemStatus::NoStock);
        prop_assert_eq!(slow_mover_action(doh, weekly, on_hand), SlowMoverAction::NoStock);
    }

    #[test]
    fn every_item_gets_exactly_one_badge_per_family(
        on_hand in -100.0..1000.0f64,
        rate in -10.0..100.0f64,
        days_exp in proptest::option::of(-30.0..365.0f64),
    ) {
        // The chains are total: any input lands on some badge, and the
        // score/discount derived from the same inputs stay consistent.
        let doh = days_of_supply(on_hand, rate);
        let weekly = rate.max(0.0) * 7.0;
        let _ = item_status(on_hand, doh, days_exp);
        let action = slow_mover_action(doh, weekly, on_hand);
        if weekly <= 0.0 && on_hand > 0.0 {
            prop_assert_eq!(action, SlowMoverAction::Investigate);
        }
    }
}
