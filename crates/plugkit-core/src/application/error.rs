//! Application layer errors.
//!
//! These errors represent failures of I/O units and collaborators, not
//! validation. Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A planned rename could not be performed.
    #[error("Cannot rename {from} to {to}: {reason}")]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("Failed to {operation} {path}: {reason}")]
    FileIo {
        path: PathBuf,
        operation: &'static str,
        reason: String,
    },

    /// An external command could not be launched or exited non-zero.
    #[error("Command `{command}` failed: {reason}")]
    ExternalProcess { command: String, reason: String },

    /// Interactive prompt failed (terminal closed, read error).
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// A field was not supplied and cannot be prompted for.
    #[error("No value for {field} and prompting is unavailable")]
    InputMissing { field: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenameFailed { from, .. } => vec![
                format!("Check that {} exists in the template", from.display()),
                "Rename the file manually if the template layout differs".into(),
            ],
            Self::FileIo { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
            ],
            Self::ExternalProcess { command, .. } => vec![
                format!("Re-run `{command}` manually once the tool is available"),
                "Ensure the command is installed and in your PATH".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Run from an interactive terminal".into(),
                "Or pass every value as a flag together with --yes".into(),
            ],
            Self::InputMissing { field } => vec![
                format!("Pass the {field} as a flag"),
                "Run from an interactive terminal to be prompted".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RenameFailed { .. } | Self::FileIo { .. } | Self::ExternalProcess { .. } => {
                ErrorCategory::Internal
            }
            Self::PromptFailed { .. } | Self::InputMissing { .. } => ErrorCategory::Validation,
        }
    }
}
