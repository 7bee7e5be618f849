//! Priority scoring and mitigating-action selection.
//!
//! Each fired reason contributes an independent partial score; partials add,
//! get a compounding boost when several reasons fire, and clamp to [0, 100].
//! The reasoning text on every action cites the numeric inputs that triggered
//! it — that is a contract with report consumers, not cosmetics.

use serde::{Deserialize, Serialize};

use shelfwise_catalog::InventoryItem;
use shelfwise_core::Thresholds;

use crate::detector::RiskReason;

/// Maximum partial score contributed by the low-stock rule.
pub const LOW_STOCK_MAX_PARTIAL: f64 = 80.0;

/// Maximum partial score contributed by the near-expiry rule.
pub const NEAR_EXPIRY_MAX_PARTIAL: f64 = 80.0;

/// Maximum partial score contributed by the slow-moving rule.
pub const SLOW_MOVING_MAX_PARTIAL: f64 = 60.0;

/// Compounding-urgency multiplier applied when more than one reason fires.
pub const MULTI_REASON_BOOST: f64 = 1.1;

/// Supply horizon (days of demand) behind suggested restock quantities.
pub const DEFAULT_TARGET_SUPPLY_DAYS: u32 = 14;

/// What the shop should do about a flagged product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Restock,
    Discount,
    Bundle,
    None,
}

/// One mitigating action per flagged product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedAction {
    pub kind: ActionKind,
    pub restock_quantity: Option<u32>,
    /// Two-element [min%, max%] range.
    pub discount_range: Option<[u8; 2]>,
    pub promotion_timing: Option<String>,
    /// Must reference the numeric inputs that justify the action.
    pub reasoning: String,
}

/// Combine fired reasons into a 0–100 integer priority score.
pub fn score(
    item: &InventoryItem,
    reasons: &[RiskReason],
    days_to_expiry: Option<i64>,
    velocity: f64,
    thresholds: &Thresholds,
) -> u8 {
    let mut sum = 0.0;
    for reason in reasons {
        sum += match reason {
            RiskReason::LowStock => low_stock_partial(item.quantity, thresholds.low_stock),
            RiskReason::NearExpiry => near_expiry_partial(
                days_to_expiry.unwrap_or(thresholds.expiry_days),
                thresholds.expiry_days,
            ),
            RiskReason::SlowMoving => {
                slow_moving_partial(velocity, thresholds.slow_moving_threshold)
            }
        };
    }

    let boosted = if reasons.len() > 1 {
        sum * MULTI_REASON_BOOST
    } else {
        sum
    };
    boosted.round().min(100.0) as u8
}

/// Linear from 0 at the ceiling to the full partial at quantity 0.
///
/// Only called once the rule fired, so `quantity <= ceiling` holds. A ceiling
/// of 0 means only out-of-stock products reach this rule; they get the full
/// partial rather than a division by zero.
fn low_stock_partial(quantity: u32, ceiling: u32) -> f64 {
    if ceiling == 0 {
        return LOW_STOCK_MAX_PARTIAL;
    }
    let deficit = f64::from(ceiling - quantity);
    LOW_STOCK_MAX_PARTIAL * deficit / f64::from(ceiling)
}

/// Linear from 0 at the window edge to the full partial at/after expiry.
fn near_expiry_partial(days: i64, window: i64) -> f64 {
    if window <= 0 || days <= 0 {
        return NEAR_EXPIRY_MAX_PARTIAL;
    }
    let remaining = days.min(window) as f64;
    NEAR_EXPIRY_MAX_PARTIAL * (window as f64 - remaining) / window as f64
}

/// Linear from 0 at the floor to the full partial at zero velocity.
///
/// A floor of 0 means the rule can never fire; the guard just keeps the
/// arithmetic total.
fn slow_moving_partial(velocity: f64, floor: f64) -> f64 {
    if floor <= 0.0 {
        return 0.0;
    }
    let shortfall = (floor - velocity).max(0.0);
    SLOW_MOVING_MAX_PARTIAL * shortfall / floor
}

/// Pick the single mitigating action for a flagged product.
///
/// Priority: restock when low on stock, discount when the clock is ticking,
/// bundle when it merely is not selling.
pub fn recommend(
    item: &InventoryItem,
    reasons: &[RiskReason],
    days_to_expiry: Option<i64>,
    velocity: f64,
    thresholds: &Thresholds,
) -> RecommendedAction {
    if reasons.contains(&RiskReason::LowStock) {
        return restock_action(item, velocity);
    }
    if reasons.contains(&RiskReason::NearExpiry) {
        return discount_action(item, days_to_expiry.unwrap_or(0), thresholds.expiry_days);
    }
    if reasons.contains(&RiskReason::SlowMoving) {
        return bundle_action(item, velocity, thresholds.slow_moving_threshold);
    }
    RecommendedAction {
        kind: ActionKind::None,
        restock_quantity: None,
        discount_range: None,
        promotion_timing: None,
        reasoning: "no risk rule fired; no action required".to_string(),
    }
}

fn restock_action(item: &InventoryItem, velocity: f64) -> RecommendedAction {
    let target = f64::from(DEFAULT_TARGET_SUPPLY_DAYS) * velocity - f64::from(item.quantity);
    // Never emit a 0-unit restock; covers the velocity-0/stock-0 case.
    let quantity = (target.ceil().max(1.0)) as u32;
    RecommendedAction {
        kind: ActionKind::Restock,
        restock_quantity: Some(quantity),
        discount_range: None,
        promotion_timing: None,
        reasoning: format!(
            "{} units on hand with average daily sales of {:.2}; restock {} units to cover {} days of demand",
            item.quantity, velocity, quantity, DEFAULT_TARGET_SUPPLY_DAYS
        ),
    }
}

fn discount_action(item: &InventoryItem, days: i64, window: i64) -> RecommendedAction {
    let range = discount_range(days, window);
    let urgency = if days <= 0 {
        format!("expired {} day(s) ago", -days)
    } else {
        format!("expires in {days} day(s)")
    };
    RecommendedAction {
        kind: ActionKind::Discount,
        restock_quantity: None,
        discount_range: Some(range),
        promotion_timing: None,
        reasoning: format!(
            "{} units on hand and {}; discount {}-{}% to clear stock before it is written off",
            item.quantity, urgency, range[0], range[1]
        ),
    }
}

fn bundle_action(item: &InventoryItem, velocity: f64, floor: f64) -> RecommendedAction {
    RecommendedAction {
        kind: ActionKind::Bundle,
        restock_quantity: None,
        discount_range: None,
        promotion_timing: Some("next scheduled sales event".to_string()),
        reasoning: format!(
            "selling {velocity:.2} units/day against a {floor:.2} units/day floor with {} units on hand; bundle with a faster mover",
            item.quantity
        ),
    }
}

/// Widens from 10–20% at the window edge to 40–60% at/after expiry.
fn discount_range(days: i64, window: i64) -> [u8; 2] {
    let urgency = if window <= 0 {
        1.0
    } else {
        1.0 - (days.clamp(0, window) as f64 / window as f64)
    };
    let min = (10.0 + 30.0 * urgency).round() as u8;
    let max = (20.0 + 40.0 * urgency).round() as u8;
    [min, max]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn item(quantity: u32) -> InventoryItem {
        InventoryItem {
            id: "p1".into(),
            sku: "SKU-1".to_string(),
            name: "Widget".to_string(),
            quantity,
            price: 10.0,
            cost: Some(5.0),
            expiry_date: None,
            tags: BTreeSet::new(),
        }
    }

    #[test]
    fn out_of_stock_scores_the_full_low_stock_partial() {
        let thresholds = Thresholds::default();
        let s = score(&item(0), &[RiskReason::LowStock], None, 0.0, &thresholds);
        assert_eq!(s, 80);
    }

    #[test]
    fn low_stock_partial_interpolates_linearly() {
        let thresholds = Thresholds::default(); // ceiling 5
        assert_eq!(
            score(&item(5), &[RiskReason::LowStock], None, 2.0, &thresholds),
            0
        );
        // deficit 3/5 of 80 = 48
        assert_eq!(
            score(&item(2), &[RiskReason::LowStock], None, 2.0, &thresholds),
            48
        );
    }

    #[test]
    fn expired_item_scores_the_full_near_expiry_partial() {
        let thresholds = Thresholds::default();
        let s = score(
            &item(50),
            &[RiskReason::NearExpiry],
            Some(-2),
            3.0,
            &thresholds,
        );
        assert_eq!(s, 80);
    }

    #[test]
    fn multiple_reasons_get_the_urgency_boost_and_clamp() {
        let thresholds = Thresholds::default();
        // 80 (qty 0) + 80 (expired) = 160, boosted and clamped to 100.
        let s = score(
            &item(0),
            &[RiskReason::LowStock, RiskReason::NearExpiry],
            Some(0),
            0.0,
            &thresholds,
        );
        assert_eq!(s, 100);

        // 0 (qty at ceiling) + 30 (velocity at half the floor) = 30 -> 33.
        let s = score(
            &item(5),
            &[RiskReason::LowStock, RiskReason::SlowMoving],
            None,
            0.25,
            &thresholds,
        );
        assert_eq!(s, 33);
    }

    #[test]
    fn low_stock_wins_action_selection_and_cites_quantity() {
        let thresholds = Thresholds::default();
        let action = recommend(&item(0), &[RiskReason::LowStock], None, 0.0, &thresholds);
        assert_eq!(action.kind, ActionKind::Restock);
        assert_eq!(action.restock_quantity, Some(1));
        assert!(action.reasoning.contains("0 units"));
    }

    #[test]
    fn restock_quantity_targets_the_supply_horizon() {
        let thresholds = Thresholds::default();
        let action = recommend(&item(3), &[RiskReason::LowStock], None, 2.0, &thresholds);
        // 14 days * 2/day - 3 on hand = 25.
        assert_eq!(action.restock_quantity, Some(25));
        assert!(action.reasoning.contains("3 units"));
        assert!(action.reasoning.contains("2.00"));
    }

    #[test]
    fn near_expiry_without_low_stock_discounts_wider_as_expiry_nears() {
        let thresholds = Thresholds::default();
        let at_edge = recommend(
            &item(50),
            &[RiskReason::NearExpiry],
            Some(7),
            3.0,
            &thresholds,
        );
        assert_eq!(at_edge.kind, ActionKind::Discount);
        assert_eq!(at_edge.discount_range, Some([10, 20]));

        let expired = recommend(
            &item(50),
            &[RiskReason::NearExpiry],
            Some(-1),
            3.0,
            &thresholds,
        );
        assert_eq!(expired.discount_range, Some([40, 60]));
        assert!(expired.reasoning.contains("50 units"));
    }

    #[test]
    fn slow_moving_alone_bundles_at_the_next_sales_event() {
        let thresholds = Thresholds::default();
        let action = recommend(&item(20), &[RiskReason::SlowMoving], None, 0.1, &thresholds);
        assert_eq!(action.kind, ActionKind::Bundle);
        assert_eq!(
            action.promotion_timing.as_deref(),
            Some("next scheduled sales event")
        );
        assert!(action.reasoning.contains("0.10"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: every score stays inside [0, 100] whatever fires.
            #[test]
            fn score_is_always_within_bounds(
                quantity in 0u32..10,
                days in -40i64..10,
                velocity in 0.0f64..1.0,
                ceiling in 0u32..10,
                window in 0i64..15,
                floor in 0.0f64..2.0,
            ) {
                let thresholds = Thresholds {
                    low_stock: ceiling,
                    expiry_days: window,
                    slow_moving_window: 30,
                    slow_moving_threshold: floor,
                };
                let it = item(quantity.min(ceiling));
                let reasons = [
                    RiskReason::LowStock,
                    RiskReason::NearExpiry,
                    RiskReason::SlowMoving,
                ];
                let s = score(&it, &reasons, Some(days), velocity.min(floor), &thresholds);
                prop_assert!(s <= 100);
            }
        }
    }
}
