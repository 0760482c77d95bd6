//! Application layer errors.
//!
//! These errors represent failures in orchestration, not template logic.
//! Template and message errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A value source could not be read at all.
    #[error("Value source '{source_name}' unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// A value source was read but its content could not be parsed.
    #[error("Value source '{source_name}' is malformed: {reason}")]
    SourceFormat { source_name: String, reason: String },

    /// Shared state of an adapter was poisoned.
    #[error("Value store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceUnavailable { source_name, .. } => vec![
                format!("Could not read: {}", source_name),
                "Check that the file exists and is readable".into(),
            ],
            Self::SourceFormat { source_name, .. } => vec![
                format!("Fix the syntax of: {}", source_name),
                "Value files are a JSON object or a TOML table of scalars".into(),
                "Example (JSON): {\"name\": \"David\", \"age\": 95}".into(),
            ],
            Self::StoreLockError => vec![
                "The value store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceUnavailable { .. } => ErrorCategory::NotFound,
            Self::SourceFormat { .. } => ErrorCategory::Validation,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
