//! `shelfwise-core` — analytics foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): identifiers, the error taxonomy, threshold configuration, and
//! the payload admission guard shared by both analysis flows.

pub mod error;
pub mod id;
pub mod limits;
pub mod thresholds;

pub use error::{AnalysisError, AnalysisResult};
pub use id::{ProductId, ShopId};
pub use limits::RowLimits;
pub use thresholds::Thresholds;
