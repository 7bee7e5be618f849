//! `shelfwise-engine` — the callable boundary of the analytics core.
//!
//! Two entry points, one per flow. Each is a synchronous, pure computation:
//! admission checks (payload ceiling, then field validation) run before any
//! work, and either the full response is built or the request is rejected
//! atomically. No I/O, no shared state, no retries; concurrent invocations
//! for different shops are fully independent.

pub mod dto;

use chrono::{DateTime, Utc};

use shelfwise_core::{AnalysisError, AnalysisResult, RowLimits, Thresholds};
use shelfwise_demand::velocity_over_window;
use shelfwise_risk::build_report;
use shelfwise_restock::{build_plan, optimize};

pub use dto::{RiskRequest, RiskResponse, RestockRequest, RestockResponse};
pub use shelfwise_core::limits::DEFAULT_MAX_ROWS;

/// Run the risk flow: velocity, detection, scoring, report.
///
/// `reference` is the analysis timestamp; identical inputs and reference
/// yield byte-identical serialized output.
pub fn assess_risk(
    req: RiskRequest,
    reference: DateTime<Utc>,
    limits: &RowLimits,
) -> AnalysisResult<RiskResponse> {
    let _span = tracing::info_span!("assess_risk", shop_id = %req.shop_id).entered();

    limits.check("inventory", req.inventory.len())?;
    limits.check("sales", req.sales.len())?;
    validate_shop_id(&req.shop_id)?;
    for item in &req.inventory {
        item.validate()?;
    }
    for record in &req.sales {
        record.validate()?;
    }

    let thresholds = req.thresholds.unwrap_or_default();
    let profile = velocity_over_window(
        &req.sales,
        thresholds.slow_moving_window,
        reference.date_naive(),
    );
    let report = build_report(req.shop_id, &req.inventory, &profile, &thresholds, reference);

    tracing::debug!(
        total = report.meta.total_products,
        flagged = report.meta.flagged_count,
        "risk report built"
    );
    Ok(report)
}

/// Run the restock flow: rank, allocate, plan.
pub fn plan_restock(req: RestockRequest, limits: &RowLimits) -> AnalysisResult<RestockResponse> {
    let _span = tracing::info_span!("plan_restock", shop_id = %req.shop_id).entered();

    limits.check("products", req.products.len())?;
    validate_shop_id(&req.shop_id)?;
    if !req.budget.is_finite() || req.budget < 0.0 {
        return Err(AnalysisError::validation(
            "budget",
            format!("budget must be a non-negative number, got {}", req.budget),
        ));
    }
    if req.restock_days == 0 {
        return Err(AnalysisError::validation(
            "restock_days",
            "restock_days must be a positive integer",
        ));
    }
    for product in &req.products {
        product.validate()?;
    }

    let outcome = optimize(&req.products, req.budget, req.goal, req.restock_days);
    let plan = build_plan(req.shop_id, req.budget, req.goal, req.restock_days, outcome);

    tracing::debug!(
        items = plan.totals.items,
        total_cost = plan.totals.total_cost,
        "restock plan built"
    );
    Ok(plan)
}

/// Effective thresholds a risk request will run with, without running it.
///
/// Lets hosts log or cache-key on the applied configuration.
pub fn effective_thresholds(req: &RiskRequest) -> Thresholds {
    req.thresholds.clone().unwrap_or_default()
}

fn validate_shop_id(shop_id: &shelfwise_core::ShopId) -> AnalysisResult<()> {
    if shop_id.as_str().trim().is_empty() {
        return Err(AnalysisError::validation(
            "shop_id",
            "shop id cannot be empty",
        ));
    }
    Ok(())
}
