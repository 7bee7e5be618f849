//! Risk report assembly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelfwise_catalog::InventoryItem;
use shelfwise_core::{ProductId, ShopId, Thresholds};
use shelfwise_demand::DemandProfile;

use crate::detector::{RiskReason, detect};
use crate::scorer::{RecommendedAction, recommend, score};

/// One at-risk product, fully scored and actioned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub product_id: ProductId,
    pub sku: String,
    pub name: String,
    /// Never empty for an item appearing in a report.
    pub reasons: Vec<RiskReason>,
    /// Priority in [0, 100].
    pub score: u8,
    pub quantity: u32,
    pub days_to_expiry: Option<i64>,
    pub average_daily_sales: f64,
    pub action: RecommendedAction,
}

/// Audit metadata attached to every report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReportMeta {
    pub shop_id: ShopId,
    pub total_products: usize,
    pub flagged_count: usize,
    pub analysis_date: DateTime<Utc>,
    /// Effective values after defaults were applied, echoed for auditing.
    pub thresholds_used: Thresholds,
}

/// The risk flow's response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub at_risk: Vec<RiskAssessment>,
    pub meta: RiskReportMeta,
}

/// Filter to flagged products, score them, sort, and package metadata.
///
/// Sort order: score descending, then days-to-expiry ascending (no expiry
/// last), then reason count descending, then product id ascending. Fully
/// deterministic for identical inputs.
pub fn build_report(
    shop_id: ShopId,
    inventory: &[InventoryItem],
    profile: &DemandProfile,
    thresholds: &Thresholds,
    reference: DateTime<Utc>,
) -> RiskReport {
    let reference_date = reference.date_naive();

    let mut at_risk: Vec<RiskAssessment> = Vec::new();
    for item in inventory {
        let velocity = profile.daily_rate(&item.id);
        let reasons = detect(item, velocity, thresholds, reference_date);
        if reasons.is_empty() {
            continue;
        }

        let days_to_expiry = item.days_to_expiry(reference_date);

        at_risk.push(RiskAssessment {
            product_id: item.id.clone(),
            sku: item.sku.clone(),
            name: item.name.clone(),
            score: score(item, &reasons, days_to_expiry, velocity, thresholds),
            action: recommend(item, &reasons, days_to_expiry, velocity, thresholds),
            reasons,
            quantity: item.quantity,
            days_to_expiry,
            average_daily_sales: velocity,
        });
    }

    at_risk.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| {
                a.days_to_expiry
                    .unwrap_or(i64::MAX)
                    .cmp(&b.days_to_expiry.unwrap_or(i64::MAX))
            })
            .then_with(|| b.reasons.len().cmp(&a.reasons.len()))
            .then_with(|| a.product_id.cmp(&b.product_id))
    });

    let flagged_count = at_risk.len();
    RiskReport {
        at_risk,
        meta: RiskReportMeta {
            shop_id,
            total_products: inventory.len(),
            flagged_count,
            analysis_date: reference,
            thresholds_used: thresholds.clone(),
        },
    }
}
