//! Plan assembly: allocations into line items, totals, and insights.

use serde::{Deserialize, Serialize};

use shelfwise_core::{ProductId, ShopId};

use crate::candidate::Goal;
use crate::optimizer::OptimizerOutcome;

/// Rounding slack allowed on the `total_cost <= budget` invariant.
pub const BUDGET_EPSILON: f64 = 1e-6;

/// One funded restock order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockLineItem {
    pub product_id: ProductId,
    pub name: String,
    /// Units to order; always >= 1.
    pub quantity: u32,
    pub unit_cost: f64,
    pub total_cost: f64,
    pub expected_revenue: f64,
    pub expected_profit: f64,
    /// Days of supply after the order arrives.
    pub resulting_days_of_stock: f64,
    /// 1-based rank in the funded ordering.
    pub priority: usize,
    pub reasoning: String,
}

/// Aggregate totals over a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockTotals {
    pub items: usize,
    pub total_quantity: u64,
    pub total_cost: f64,
    pub budget_utilization_pct: f64,
    pub expected_revenue: f64,
    pub expected_profit: f64,
    pub expected_roi_pct: f64,
    pub average_days_of_stock: f64,
}

/// The restock flow's response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockPlan {
    pub strategy: Goal,
    pub shop_id: ShopId,
    pub budget: f64,
    pub items: Vec<RestockLineItem>,
    pub totals: RestockTotals,
    pub insights: Vec<String>,
}

/// Convert accepted allocations into the reportable plan.
pub fn build_plan(
    shop_id: ShopId,
    budget: f64,
    goal: Goal,
    horizon_days: u32,
    outcome: OptimizerOutcome,
) -> RestockPlan {
    let items: Vec<RestockLineItem> = outcome
        .allocations
        .iter()
        .enumerate()
        .map(|(index, alloc)| {
            let input = &alloc.candidate.input;
            let quantity = f64::from(alloc.quantity);
            let resulting_days_of_stock = if input.velocity > 0.0 {
                (f64::from(input.quantity) + quantity) / input.velocity
            } else {
                // No demand signal to project against; the order was sized to
                // the horizon, so report the horizon.
                f64::from(horizon_days)
            };
            RestockLineItem {
                product_id: input.id.clone(),
                name: input.name.clone(),
                quantity: alloc.quantity,
                unit_cost: alloc.candidate.unit_cost,
                total_cost: alloc.cost,
                expected_revenue: quantity * input.price,
                expected_profit: quantity * alloc.candidate.unit_profit,
                resulting_days_of_stock,
                priority: index + 1,
                reasoning: format!(
                    "prioritized for {}: ${:.2}/unit margin at {:.2} units/day; {} units lift cover from {:.1} to {:.1} days",
                    goal.rank_driver(),
                    alloc.candidate.unit_profit,
                    input.velocity,
                    alloc.quantity,
                    alloc.candidate.days_of_stock,
                    resulting_days_of_stock,
                ),
            }
        })
        .collect();

    let totals = totals_for(&items, budget);
    let insights = insights_for(&items, &totals, budget, outcome.unfunded);

    RestockPlan {
        strategy: goal,
        shop_id,
        budget,
        items,
        totals,
        insights,
    }
}

fn totals_for(items: &[RestockLineItem], budget: f64) -> RestockTotals {
    let total_cost: f64 = items.iter().map(|i| i.total_cost).sum();
    let expected_revenue: f64 = items.iter().map(|i| i.expected_revenue).sum();
    let expected_profit: f64 = items.iter().map(|i| i.expected_profit).sum();
    let total_days: f64 = items.iter().map(|i| i.resulting_days_of_stock).sum();

    RestockTotals {
        items: items.len(),
        total_quantity: items.iter().map(|i| u64::from(i.quantity)).sum(),
        total_cost,
        budget_utilization_pct: if budget > 0.0 {
            total_cost / budget * 100.0
        } else {
            0.0
        },
        expected_revenue,
        expected_profit,
        expected_roi_pct: if total_cost > 0.0 {
            expected_profit / total_cost * 100.0
        } else {
            0.0
        },
        average_days_of_stock: if items.is_empty() {
            0.0
        } else {
            total_days / items.len() as f64
        },
    }
}

/// Rule-based observations about the plan as a whole.
fn insights_for(
    items: &[RestockLineItem],
    totals: &RestockTotals,
    budget: f64,
    unfunded: usize,
) -> Vec<String> {
    let mut insights = Vec::new();

    if items.is_empty() {
        insights.push("no products need restocking within the target horizon".to_string());
        return insights;
    }

    if unfunded > 0 {
        insights.push(format!(
            "budget exhausted before {unfunded} candidate(s) could be funded; consider raising the budget or narrowing candidates"
        ));
    }

    if totals.budget_utilization_pct < 50.0 {
        insights.push(
            "budget utilization below 50%: consider lowering the target horizon or adding more candidates"
                .to_string(),
        );
    }

    if unfunded == 0 && budget - totals.total_cost > BUDGET_EPSILON {
        insights.push(format!(
            "all restock needs covered with ${:.2} unspent",
            budget - totals.total_cost
        ));
    }

    insights
}
