//! Greedy budget allocation.

use std::cmp::Ordering;

use crate::candidate::{Goal, RestockCandidate, RestockCandidateInput};

/// Fallback margin assumed when unit cost is unknown: cost = price × (1 - this).
///
/// 20% is the documented default; deployments needing a different parity can
/// pass their own value to [`optimize_with_margin`].
pub const DEFAULT_MARGIN_FALLBACK: f64 = 0.20;

/// Guard divisor so zero-velocity products get a finite days-of-stock.
const VELOCITY_EPSILON: f64 = 1e-9;

/// One accepted allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub candidate: RestockCandidate,
    /// Units to order; always >= 1.
    pub quantity: u32,
    /// `quantity × unit_cost`.
    pub cost: f64,
}

/// Allocations plus what the pass could not fund.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptimizerOutcome {
    /// In acceptance order (rank order).
    pub allocations: Vec<Allocation>,
    /// Needy candidates that received zero units before the pass stopped.
    pub unfunded: usize,
}

/// Single-pass greedy allocator with the documented margin fallback.
pub fn optimize(
    candidates: &[RestockCandidateInput],
    budget: f64,
    goal: Goal,
    horizon_days: u32,
) -> OptimizerOutcome {
    optimize_with_margin(candidates, budget, goal, horizon_days, DEFAULT_MARGIN_FALLBACK)
}

/// Single-pass greedy allocator.
///
/// 1. Derive days-of-stock, unit cost/profit, and the goal-dependent rank key.
/// 2. Drop candidates already holding `horizon_days` of supply.
/// 3. Walk the ranking; fund each desired quantity in full while the budget
///    allows. The first candidate that does not fit gets whatever whole units
///    remain affordable, and the pass stops there — partial fill is terminal.
///
/// Ties on rank key break toward the lower product id. The pass never spends
/// more than `budget`.
pub fn optimize_with_margin(
    candidates: &[RestockCandidateInput],
    budget: f64,
    goal: Goal,
    horizon_days: u32,
    margin_fallback: f64,
) -> OptimizerOutcome {
    let mut needy = rank_candidates(candidates, goal, horizon_days, margin_fallback);
    needy.sort_by(|a, b| {
        b.rank_key
            .partial_cmp(&a.rank_key)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.input.id.cmp(&b.input.id))
    });

    let horizon = f64::from(horizon_days);
    let mut remaining = budget;
    let mut allocations = Vec::new();
    let mut funded = 0usize;

    for candidate in &needy {
        if remaining <= 0.0 {
            break;
        }

        let desired = desired_quantity(candidate, horizon);
        let full_cost = f64::from(desired) * candidate.unit_cost;

        if full_cost <= remaining {
            remaining -= full_cost;
            allocations.push(Allocation {
                candidate: candidate.clone(),
                quantity: desired,
                cost: full_cost,
            });
            funded += 1;
            continue;
        }

        // Partial fill: take what is affordable, then stop. Nothing ranked
        // below this candidate can be funded either.
        let affordable = (remaining / candidate.unit_cost).floor() as u32;
        if affordable >= 1 {
            let cost = f64::from(affordable) * candidate.unit_cost;
            remaining -= cost;
            allocations.push(Allocation {
                candidate: candidate.clone(),
                quantity: affordable,
                cost,
            });
            funded += 1;
        }
        break;
    }

    OptimizerOutcome {
        allocations,
        unfunded: needy.len() - funded,
    }
}

/// Units needed to carry the candidate to the horizon.
fn desired_quantity(candidate: &RestockCandidate, horizon: f64) -> u32 {
    let input = &candidate.input;
    if input.velocity <= 0.0 && input.quantity == 0 {
        // Out of stock with no demand signal: never silently skip, order one.
        return 1;
    }
    let units = ((horizon - candidate.days_of_stock) * input.velocity).ceil();
    (units.max(1.0)) as u32
}

/// Derive ranking state and drop candidates that need no restock.
fn rank_candidates(
    candidates: &[RestockCandidateInput],
    goal: Goal,
    horizon_days: u32,
    margin_fallback: f64,
) -> Vec<RestockCandidate> {
    let horizon = f64::from(horizon_days);

    let mut needy: Vec<RestockCandidate> = candidates
        .iter()
        .filter_map(|input| {
            let unit_cost = input
                .cost
                .unwrap_or(input.price * (1.0 - margin_fallback));
            let unit_profit = input.price - unit_cost;
            let days_of_stock =
                f64::from(input.quantity) / input.velocity.max(VELOCITY_EPSILON);
            if days_of_stock >= horizon {
                return None;
            }
            Some(RestockCandidate {
                input: input.clone(),
                days_of_stock,
                unit_cost,
                unit_profit,
                rank_key: 0.0,
            })
        })
        .collect();

    match goal {
        Goal::Profit => {
            for c in &mut needy {
                c.rank_key = c.unit_profit * c.input.velocity;
            }
        }
        Goal::Volume => {
            for c in &mut needy {
                c.rank_key = c.input.velocity;
            }
        }
        Goal::Balanced => {
            // Normalize each signal by the candidate-set maximum, then average.
            let max_profit = needy
                .iter()
                .map(|c| c.unit_profit * c.input.velocity)
                .fold(0.0f64, f64::max);
            let max_velocity = needy
                .iter()
                .map(|c| c.input.velocity)
                .fold(0.0f64, f64::max);
            for c in &mut needy {
                let profit_score = if max_profit > 0.0 {
                    (c.unit_profit * c.input.velocity) / max_profit
                } else {
                    0.0
                };
                let velocity_score = if max_velocity > 0.0 {
                    c.input.velocity / max_velocity
                } else {
                    0.0
                };
                c.rank_key = (profit_score + velocity_score) / 2.0;
            }
        }
    }

    needy
}
