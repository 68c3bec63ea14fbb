//! Application layer errors.
//!
//! These errors represent failures in orchestration, not in the plans
//! themselves. Plan and path errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The marker file that identifies the project root is absent.
    #[error("Project marker not found: {marker}")]
    PreconditionMissing { marker: PathBuf },

    /// The file to patch does not exist.
    #[error("Patch target not found: {path}")]
    TargetNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Adapter state access failed (lock poisoned).
    #[error("Adapter state lock poisoned")]
    StoreLockError,

    /// The kit location does not exist.
    #[error("Kit not found at {path}")]
    KitNotFound { path: PathBuf },

    /// The kit exists but could not be loaded.
    #[error("Invalid kit at {path}: {reason}")]
    InvalidKit { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PreconditionMissing { marker } => vec![
                format!("'{}' was not found", marker.display()),
                "Run this from your Shopify app root directory".into(),
                "Or point at it with --root <DIR>".into(),
            ],
            Self::TargetNotFound { path } => vec![
                format!("Nothing to patch at {}", path.display()),
                "Check the entry file location with --target <PATH>".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::StoreLockError => vec!["Internal state was poisoned by an earlier panic".into()],
            Self::KitNotFound { path } => vec![
                format!("No kit directory at {}", path.display()),
                "Omit --kit to use the built-in countdown-timer kit".into(),
            ],
            Self::InvalidKit { reason, .. } => vec![
                format!("Kit problem: {}", reason),
                "A kit needs a files/ directory and an optional patch.toml".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PreconditionMissing { .. } | Self::TargetNotFound { .. } => {
                ErrorCategory::Precondition
            }
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::KitNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidKit { .. } => ErrorCategory::Validation,
        }
    }
}
