//! Payload admission guard.
//!
//! The only admission-control concern inside the core: oversized input
//! collections are rejected before any computation, never degraded.

use crate::error::{AnalysisError, AnalysisResult};

/// Default row ceiling per input collection.
pub const DEFAULT_MAX_ROWS: usize = 10_000;

/// Row ceiling applied to every input collection of a request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RowLimits {
    pub max_rows: usize,
}

impl Default for RowLimits {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl RowLimits {
    pub fn new(max_rows: usize) -> Self {
        Self { max_rows }
    }

    /// Fail fast when `rows` exceeds the ceiling.
    pub fn check(&self, collection: &'static str, rows: usize) -> AnalysisResult<()> {
        if rows > self.max_rows {
            return Err(AnalysisError::PayloadTooLarge {
                collection,
                rows,
                limit: self.max_rows,
            });
        }
        Ok(())
    }
}
