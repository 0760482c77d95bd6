// ============================================================================
// domain/error.rs - TEMPLATE AND MESSAGE ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so services can hand them out repeatedly)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Template Syntax
    // ========================================================================
    /// A `${` with no closing `}` after it.
    #[error("unterminated placeholder '${{' at byte {position}")]
    UnterminatedPlaceholder { position: usize },

    /// Strict rendering found placeholders without a value.
    #[error("no value for placeholder(s): {}", names.join(", "))]
    UnresolvedPlaceholders { names: Vec<String> },

    // ========================================================================
    // Messages
    // ========================================================================
    #[error("message does not contain the payload delimiter")]
    MissingDelimiter,

    // ========================================================================
    // Values
    // ========================================================================
    #[error("invalid value for '{key}': {reason}")]
    InvalidValues { key: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnterminatedPlaceholder { position } => vec![
                format!("A '${{' at byte {} is never closed with '}}'", position),
                "Close the placeholder, e.g. ${name}".into(),
                "Without --strict the template is passed through unchanged".into(),
            ],
            Self::UnresolvedPlaceholders { names } => {
                let mut suggestions = vec!["Provide a value for each placeholder:".into()];
                for name in names {
                    suggestions.push(format!("  --set {}=<value>", name));
                }
                suggestions.push("Or drop --strict to leave them untouched".into());
                suggestions
            }
            Self::MissingDelimiter => vec![
                "The input is not a composed message".into(),
                "Create one with: herald compose <DISPLAY> --payload <PAYLOAD>".into(),
            ],
            Self::InvalidValues { key, .. } => vec![
                format!("Check the value of '{}'", key),
                "Values must be strings, numbers or booleans".into(),
            ],
        }
    }

    /// Every domain error is a problem with the caller's input.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnterminatedPlaceholder { .. }
            | Self::UnresolvedPlaceholders { .. }
            | Self::MissingDelimiter
            | Self::InvalidValues { .. } => ErrorCategory::Validation,
        }
    }
}
