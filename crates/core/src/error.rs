//! Analysis error model.

use thiserror::Error;

/// Result type used across the analytics core.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Admission-stage failure.
///
/// Keep this focused on deterministic rejections raised *before* any
/// computation starts (validation, payload ceilings). Numeric edge cases
/// inside a computation resolve via documented fallback constants and never
/// surface here; empty inputs are not errors at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A required field was missing or malformed.
    #[error("validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    /// An input collection exceeded the configured row ceiling.
    #[error("payload too large: {collection} has {rows} rows (limit {limit})")]
    PayloadTooLarge {
        collection: &'static str,
        rows: usize,
        limit: usize,
    },
}

impl AnalysisError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
