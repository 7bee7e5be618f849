//! `shelfwise-risk` — at-risk inventory detection, scoring, and reporting.
//!
//! Three passes, each pure and independently testable:
//! - `detector`: per-rule predicates producing zero or more [`RiskReason`]s.
//! - `scorer`: combines reasons into a 0–100 priority score and picks one
//!   mitigating [`RecommendedAction`] with number-citing reasoning.
//! - `report`: filters, sorts, and packages the response with audit metadata.

pub mod detector;
pub mod report;
pub mod scorer;

pub use detector::RiskReason;
pub use report::{RiskAssessment, RiskReport, RiskReportMeta, build_report};
pub use scorer::{ActionKind, RecommendedAction};
