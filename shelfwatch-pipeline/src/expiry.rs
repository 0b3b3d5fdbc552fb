//! Expiration-derived fields and the expiration window filter.

use chrono::NaiveDate;

use crate::types::ItemSummary;

/// Days from the as-of date to an expiration date. Already-expired lots
/// come back negative, which classifies as expiring like any near-date lot.
pub fn days_to_expire(expiration: Option<NaiveDate>, as_of: NaiveDate) -> Option<f64> {
    expiration.map(|date| (date - as_of).num_days() as f64)
}

/// Buyer-selectable expiration windows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpirationWindow {
    #[default]
    Any,
    Within30,
    Within60,
    Within90,
}

impl ExpirationWindow {
    /// Strict upper bound in days, or `None` for the pass-through window.
    pub fn limit(&self) -> Option<f64> {
        match self {
            ExpirationWindow::Any => None,
            ExpirationWindow::Within30 => Some(30.0),
            ExpirationWindow::Within60 => Some(60.0),
            ExpirationWindow::Within90 => Some(90.0),
        }
    }
}

/// Keep summaries expiring strictly inside the window.
///
/// A dataset without an expiration column has no expiry feature, so every
/// window passes all rows through rather than filtering everything out.
/// Rows with no expiration date never match a bounded window.
pub fn filter_by_expiration(
    items: Vec<ItemSummary>,
    window: ExpirationWindow,
    has_expiration: bool,
) -> Vec<ItemSummary> {
    let limit = match window.limit() {
        Some(limit) if has_expiration => limit,
        _ => return items,
    };
    items
        .into_iter()
        .filter(|item| item.days_to_expire.is_some_and(|days| days < limit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doh::UNKNOWN_DAYS_OF_SUPPLY;
    use crate::types::{DiscountBand, ItemStatus, SlowMoverAction};

    fn item(key: &str, days: Option<f64>) -> ItemSummary {
        ItemSummary {
            key: key.to_string(),
            category: None,
            on_hand: 10.0,
            unit_cost: None,
            earliest_expiration: None,
            days_to_expire: days,
            total_sold: 0.0,
            daily_run_rate: 0.0,
            avg_weekly_sales: 0.0,
            days_of_supply: UNKNOWN_DAYS_OF_SUPPLY,
            status: ItemStatus::Healthy,
            action: SlowMoverAction::Healthy,
            slow_mover_score: 0.0,
            discount_band: DiscountBand::NotNeeded,
            suggested_po_price: 0.0,
        }
    }

    fn keys(items: &[ItemSummary]) -> Vec<&str> {
        items.iter().map(|i| i.key.as_str()).collect()
    }

    fn sample() -> Vec<ItemSummary> {
        vec![
            item("A", Some(20.0)),
            item("B", Some(45.0)),
            item("C", Some(75.0)),
            item("D", None),
        ]
    }

    #[test]
    fn any_window_returns_all() {
        let out = filter_by_expiration(sample(), ExpirationWindow::Any, true);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn windows_are_strict_upper_bounds() {
        let out = filter_by_expiration(sample(), ExpirationWindow::Within30, true);
        assert_eq!(keys(&out), vec!["A"]);

        let out = filter_by_expiration(sample(), ExpirationWindow::Within60, true);
        assert_eq!(keys(&out), vec!["A", "B"]);

        let out = filter_by_expiration(sample(), ExpirationWindow::Within90, true);
        assert_eq!(keys(&out), vec!["A", "B", "C"]);
    }

    #[test]
    fn exact_boundary_is_excluded() {
        let out = filter_by_expiration(
            vec![item("E", Some(30.0))],
            ExpirationWindow::Within30,
            true,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn missing_expiry_rows_never_match_bounded_windows() {
        let out = filter_by_expiration(sample(), ExpirationWindow::Within90, true);
        assert!(!keys(&out).contains(&"D"));
    }

    #[test]
    fn dataset_without_expiry_feature_passes_through() {
        let out = filter_by_expiration(sample(), ExpirationWindow::Within30, false);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn days_to_expire_is_relative_to_as_of() {
        let as_of = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let exp = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(days_to_expire(Some(exp), as_of), Some(59.0));
        assert_eq!(days_to_expire(None, as_of), None);

        let past = NaiveDate::from_ymd_opt(2025, 12, 30).unwrap();
        assert_eq!(days_to_expire(Some(past), as_of), Some(-2.0));
    }
}
