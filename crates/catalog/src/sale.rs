use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shelfwise_core::{AnalysisError, AnalysisResult, ProductId};

/// One row of the append-only sales ledger.
///
/// The core only ever reads a window of the ledger; it never appends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub product_id: ProductId,
    pub date: NaiveDate,
    /// Units sold; always >= 1.
    pub quantity: u32,
    /// Revenue the sale produced; derived as price × quantity when absent.
    #[serde(default)]
    pub revenue: Option<f64>,
}

impl SalesRecord {
    /// Field-level validation, applied before any computation.
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.product_id.as_str().trim().is_empty() {
            return Err(AnalysisError::validation(
                "sales.product_id",
                "product id cannot be empty",
            ));
        }
        if self.quantity == 0 {
            return Err(AnalysisError::validation(
                "sales.quantity",
                "quantity sold must be positive",
            ));
        }
        if let Some(revenue) = self.revenue {
            if !revenue.is_finite() || revenue < 0.0 {
                return Err(AnalysisError::validation(
                    "sales.revenue",
                    format!("revenue must be a non-negative number, got {revenue}"),
                ));
            }
        }
        Ok(())
    }

    /// Revenue for this row, deriving from the given unit price when the
    /// ledger did not record it.
    pub fn revenue_or_derived(&self, unit_price: f64) -> f64 {
        self.revenue
            .unwrap_or(unit_price * f64::from(self.quantity))
    }
}
