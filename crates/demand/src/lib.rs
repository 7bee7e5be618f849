//! `shelfwise-demand` — sales velocity derivation.
//!
//! Turns a sales ledger window into per-product average daily demand. Both
//! analysis flows read the same profile: the risk flow computes it from the
//! raw ledger, the restock flow receives it pre-folded into its candidates.

pub mod calculator;

pub use calculator::{DemandProfile, velocity_over_window};
