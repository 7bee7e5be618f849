//! `shelfwise-restock` — budget-constrained restock planning.
//!
//! A greedy single-pass allocator ranks candidates by the requested business
//! goal, funds them until the budget runs out, and the plan builder turns the
//! accepted allocations into a reportable plan with totals and per-item
//! rationale. The allocator never exceeds the budget; it may under-spend it
//! when every need is met first.

pub mod candidate;
pub mod optimizer;
pub mod plan;

pub use candidate::{Goal, RestockCandidate, RestockCandidateInput};
pub use optimizer::{Allocation, OptimizerOutcome, optimize};
pub use plan::{RestockLineItem, RestockPlan, RestockTotals, build_plan};
