// ============================================================================
// domain/error.rs - VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Collection-time validation
    // ========================================================================
    #[error("Required field is empty: {field}")]
    EmptyField { field: &'static str },

    #[error("'{input}' has no usable characters for {field}")]
    SlugCollapsed { field: &'static str, input: String },

    // ========================================================================
    // Plan / table invariants
    // ========================================================================
    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Placeholder '{inner}' is contained in placeholder '{outer}'")]
    OverlappingTokens {
        outer: &'static str,
        inner: &'static str,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyField { field } => vec![
                format!("Provide a value for the {field}"),
                "Every field is required".into(),
            ],
            Self::SlugCollapsed { field, input } => vec![
                format!("'{input}' contains no letters or digits once converted to ASCII"),
                format!("Use at least one latin letter or digit in the {field}"),
                "Example: my-plugin".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{path}' must be relative to the project root"),
            ],
            Self::OverlappingTokens { .. } => vec![
                "The placeholder table is inconsistent".into(),
                "This is a bug, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyField { .. } | Self::SlugCollapsed { .. } => ErrorCategory::Validation,
            Self::AbsolutePathNotAllowed { .. } | Self::OverlappingTokens { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
