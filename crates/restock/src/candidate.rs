//! Restock candidates: caller-supplied facts and derived ranking state.

use serde::{Deserialize, Serialize};

use shelfwise_core::{AnalysisError, AnalysisResult, ProductId};

/// The business goal a plan optimizes for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Profit,
    Volume,
    Balanced,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Profit => "profit",
            Goal::Volume => "volume",
            Goal::Balanced => "balanced",
        }
    }

    /// What drove the ranking, for line-item rationale.
    pub fn rank_driver(&self) -> &'static str {
        match self {
            Goal::Profit => "profit margin and sales velocity",
            Goal::Volume => "sales velocity",
            Goal::Balanced => "balanced margin and velocity",
        }
    }
}

/// Caller-supplied facts about one product considered for restocking.
///
/// Velocity arrives pre-computed (the host folds the shared velocity
/// calculation into the request); everything else is a current snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockCandidateInput {
    pub id: ProductId,
    pub name: String,
    /// Current on-hand quantity in units.
    pub quantity: u32,
    /// Sale price per unit.
    pub price: f64,
    /// Acquisition cost per unit, when known.
    #[serde(default)]
    pub cost: Option<f64>,
    /// Average units sold per day.
    pub velocity: f64,
}

impl RestockCandidateInput {
    /// Field-level validation, applied before any computation.
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(AnalysisError::validation(
                "products.id",
                "product id cannot be empty",
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AnalysisError::validation(
                "products.price",
                format!("price must be a non-negative number, got {}", self.price),
            ));
        }
        if let Some(cost) = self.cost {
            if !cost.is_finite() || cost < 0.0 {
                return Err(AnalysisError::validation(
                    "products.cost",
                    format!("cost must be a non-negative number, got {cost}"),
                ));
            }
        }
        if !self.velocity.is_finite() || self.velocity < 0.0 {
            return Err(AnalysisError::validation(
                "products.velocity",
                format!("velocity must be a non-negative number, got {}", self.velocity),
            ));
        }
        Ok(())
    }
}

/// Derived ranking state for one candidate (internal to the optimizer).
#[derive(Debug, Clone, PartialEq)]
pub struct RestockCandidate {
    pub input: RestockCandidateInput,
    /// Estimated days until stockout at current demand.
    pub days_of_stock: f64,
    pub unit_cost: f64,
    pub unit_profit: f64,
    pub rank_key: f64,
}
