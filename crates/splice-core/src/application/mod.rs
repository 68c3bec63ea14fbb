//! Application layer for Splice.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, PatchService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! splicing logic itself. That lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    PatchReport, PatchService, PatchStatus, RunMode, ScaffoldReport, ScaffoldService,
    ScaffoldedFile,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, KitSource};

pub use error::ApplicationError;
