//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! the two use cases: "scaffold a kit" and "patch the entry file".

pub mod patch_service;
pub mod scaffold_service;

pub use patch_service::{PatchReport, PatchService, PatchStatus};
pub use scaffold_service::{ScaffoldReport, ScaffoldService, ScaffoldedFile};

use tracing::warn;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::ProjectRoot,
    error::SpliceResult,
};

/// Whether a service may mutate the filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    #[default]
    Write,
    /// Compute the full report but never call a mutating port method.
    DryRun,
}

impl RunMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { Self::DryRun } else { Self::Write }
    }

    pub fn writes(self) -> bool {
        self == Self::Write
    }
}

/// Refuse to run outside a project root.
fn ensure_project_root(filesystem: &dyn Filesystem, root: &ProjectRoot) -> SpliceResult<()> {
    let marker = root.marker_path();
    if filesystem.exists(&marker) {
        return Ok(());
    }

    warn!(marker = %marker.display(), "Project marker missing, refusing to run");
    Err(ApplicationError::PreconditionMissing { marker }.into())
}
