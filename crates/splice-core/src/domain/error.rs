// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so reports can carry them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Scaffold plan has no files")]
    EmptyPlan,

    #[error("Duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    #[error("{block} block is empty")]
    EmptyBlock { block: &'static str },

    #[error("Invalid anchor pattern '{pattern}': {reason}")]
    InvalidAnchor { pattern: String, reason: String },

    #[error("Invalid kit: {0}")]
    InvalidKit(String),

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyPlan => vec![
                "The kit does not declare any files to generate".into(),
                "Add files under the kit's files/ directory".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("'{}' is declared more than once", path),
                "Each generated file must have a unique path".into(),
            ],
            Self::AbsolutePathNotAllowed { path } | Self::PathEscapesRoot { path } => vec![
                format!("'{}' must stay inside the project root", path),
                "Use a relative path such as web/index.js".into(),
            ],
            Self::EmptyBlock { block } => vec![
                format!("The {} block has no content", block),
                "Check the kit's patch.toml".into(),
            ],
            Self::InvalidAnchor { pattern, .. } => vec![
                format!("'{}' is not a valid regular expression", pattern),
                "Escape literal characters such as '(' and '.' with a backslash".into(),
            ],
            Self::InvalidKit(msg) => vec![
                "Check the kit directory layout (files/ and patch.toml)".into(),
                format!("Details: {}", msg),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Set '{}' in the kit's patch.toml", field)]
            }
        }
    }
}
