use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shelfwise_core::{AnalysisError, AnalysisResult, ProductId};

/// Snapshot of a single product as the shop currently stocks it.
///
/// Identity is `id`; uniqueness across a request is the caller's
/// responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    /// On-hand quantity in units.
    pub quantity: u32,
    /// Sale price per unit.
    pub price: f64,
    /// Acquisition cost per unit, when known.
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    /// Category tags (possibly empty).
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl InventoryItem {
    /// Field-level validation, applied before any computation.
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(AnalysisError::validation(
                "inventory.id",
                "product id cannot be empty",
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AnalysisError::validation(
                "inventory.price",
                format!("price must be a non-negative number, got {}", self.price),
            ));
        }
        if let Some(cost) = self.cost {
            if !cost.is_finite() || cost < 0.0 {
                return Err(AnalysisError::validation(
                    "inventory.cost",
                    format!("cost must be a non-negative number, got {cost}"),
                ));
            }
        }
        Ok(())
    }

    /// Days until expiry relative to `reference`; negative once expired.
    pub fn days_to_expiry(&self, reference: NaiveDate) -> Option<i64> {
        self.expiry_date
            .map(|expiry| (expiry - reference).num_days())
    }
}
