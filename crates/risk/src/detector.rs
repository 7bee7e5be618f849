//! Independent per-rule risk predicates.
//!
//! Each rule looks at one product plus its velocity and fires on its own;
//! a product accumulates the union of everything that fired. No rule ever
//! consults another rule's outcome, with one deliberate exception: a product
//! with zero stock is out of stock, not slow moving, so `SLOW_MOVING`
//! requires quantity > 0.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shelfwise_catalog::InventoryItem;
use shelfwise_core::Thresholds;

/// Items expired longer than this many days ago are stale catalog data, not
/// an actionable expiry warning.
pub const EXPIRED_GRACE_DAYS: i64 = 30;

/// Why a product was flagged. A product may carry several at once.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskReason {
    LowStock,
    NearExpiry,
    SlowMoving,
}

/// Quantity at or below the configured ceiling.
pub fn low_stock(item: &InventoryItem, thresholds: &Thresholds) -> bool {
    item.quantity <= thresholds.low_stock
}

/// Expiry date present and within the warning window.
///
/// Already-expired items still qualify (days-to-expiry <= 0) up to
/// [`EXPIRED_GRACE_DAYS`] past expiry. Returns the signed days-to-expiry when
/// the rule fires.
pub fn near_expiry(
    item: &InventoryItem,
    thresholds: &Thresholds,
    reference: NaiveDate,
) -> Option<i64> {
    let days = item.days_to_expiry(reference)?;
    (days <= thresholds.expiry_days && days >= -EXPIRED_GRACE_DAYS).then_some(days)
}

/// Velocity below the configured floor, for a product that is actually on
/// the shelf.
pub fn slow_moving(item: &InventoryItem, velocity: f64, thresholds: &Thresholds) -> bool {
    item.quantity > 0 && velocity < thresholds.slow_moving_threshold
}

/// Union of all rules that fire for one product, in canonical order.
pub fn detect(
    item: &InventoryItem,
    velocity: f64,
    thresholds: &Thresholds,
    reference: NaiveDate,
) -> Vec<RiskReason> {
    let mut reasons = Vec::new();
    if low_stock(item, thresholds) {
        reasons.push(RiskReason::LowStock);
    }
    if near_expiry(item, thresholds, reference).is_some() {
        reasons.push(RiskReason::NearExpiry);
    }
    if slow_moving(item, velocity, thresholds) {
        reasons.push(RiskReason::SlowMoving);
    }
    reasons
}
