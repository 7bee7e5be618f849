//! Request/response shapes at the function-call boundary.
//!
//! The embedding host (HTTP layer, RPC handler, job runner) deserializes
//! requests into these and serializes the responses straight back out; field
//! names here are the wire contract.

use serde::{Deserialize, Serialize};

use shelfwise_catalog::{InventoryItem, SalesRecord};
use shelfwise_core::{ShopId, Thresholds};
use shelfwise_restock::{Goal, RestockCandidateInput};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRequest {
    pub shop_id: ShopId,
    pub inventory: Vec<InventoryItem>,
    pub sales: Vec<SalesRecord>,
    /// Absent means all defaults; partial structs fill the gaps from defaults.
    #[serde(default)]
    pub thresholds: Option<Thresholds>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockRequest {
    pub shop_id: ShopId,
    /// Non-negative; 0 yields an empty plan rather than an error.
    pub budget: f64,
    pub goal: Goal,
    /// Target supply horizon in days; must be >= 1.
    pub restock_days: u32,
    pub products: Vec<RestockCandidateInput>,
}

// -------------------------
// Response DTOs
// -------------------------

/// The risk response is the report itself: `{ at_risk, meta }`.
pub use shelfwise_risk::RiskReport as RiskResponse;

/// The restock response is the plan itself:
/// `{ strategy, shop_id, budget, items, totals, insights }`.
pub use shelfwise_restock::RestockPlan as RestockResponse;
