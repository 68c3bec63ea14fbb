//! Unified error handling for Splice Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Splice Core operations.
///
/// This enum wraps all possible errors that can occur when using splice-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum SpliceError {
    /// Errors from the domain layer (invalid plans, paths, anchors).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (preconditions, I/O).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SpliceError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Splice".into(),
                "Please report this issue at: https://github.com/cosecruz/splice/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            // Every domain error is a rejected plan, path, or pattern.
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether the operation was refused before touching the filesystem.
    ///
    /// Refusals (missing marker file, missing patch target) leave the project
    /// untouched and are reported to the operator rather than treated as
    /// failures.
    pub fn is_refusal(&self) -> bool {
        self.category() == ErrorCategory::Precondition
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Precondition,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type SpliceResult<T> = Result<T, SpliceError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn missing_marker_is_a_refusal() {
        let err: SpliceError = ApplicationError::PreconditionMissing {
            marker: PathBuf::from("/tmp/app/shopify.app.toml"),
        }
        .into();

        assert!(err.is_refusal());
        assert_eq!(err.category(), ErrorCategory::Precondition);
    }

    #[test]
    fn filesystem_failure_is_not_a_refusal() {
        let err: SpliceError = ApplicationError::FilesystemError {
            path: PathBuf::from("web/index.js"),
            reason: "permission denied".into(),
        }
        .into();

        assert!(!err.is_refusal());
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn domain_validation_maps_to_validation() {
        let err: SpliceError = DomainError::EmptyPlan.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
