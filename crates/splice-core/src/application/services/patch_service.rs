//! Patch Service - splices a kit's wiring into an existing entry file.
//!
//! Workflow:
//! 1. Refuse unless the project marker exists
//! 2. Refuse unless the target file exists
//! 3. Read, splice in memory, write back
//!
//! A target that already carries the sentinel is left untouched.

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, RunMode, ports::Filesystem, services::ensure_project_root},
    domain::{PatchOutcome, PatchPlan, ProjectRoot, RelativePath, Splice},
    error::SpliceResult,
};

/// How the target file was affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PatchStatus {
    /// Sentinel found; nothing was written.
    AlreadyPatched,
    Patched(PatchOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    pub target: RelativePath,
    #[serde(flatten)]
    pub status: PatchStatus,
    pub dry_run: bool,
}

impl PatchReport {
    pub fn outcome(&self) -> Option<PatchOutcome> {
        match self.status {
            PatchStatus::AlreadyPatched => None,
            PatchStatus::Patched(outcome) => Some(outcome),
        }
    }
}

/// Applies patch plans through the `Filesystem` port.
pub struct PatchService {
    filesystem: Box<dyn Filesystem>,
}

impl PatchService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    #[instrument(
        skip_all,
        fields(
            root = %root.dir().display(),
            target = %target,
            dry_run = !mode.writes()
        )
    )]
    pub fn patch(
        &self,
        root: &ProjectRoot,
        target: &RelativePath,
        plan: &PatchPlan,
        mode: RunMode,
    ) -> SpliceResult<PatchReport> {
        ensure_project_root(self.filesystem.as_ref(), root)?;

        let path = root.resolve(target);
        if !self.filesystem.is_file(&path) {
            warn!(path = %path.display(), "Patch target missing, refusing to run");
            return Err(ApplicationError::TargetNotFound { path }.into());
        }

        let source = self.filesystem.read_to_string(&path)?;

        let status = match plan.apply(&source) {
            Splice::AlreadyApplied => {
                warn!(sentinel = %plan.sentinel, "Integration already present");
                PatchStatus::AlreadyPatched
            }
            Splice::Applied { content, outcome } => {
                if !outcome.import_inserted {
                    warn!("Import anchor not found, import block skipped");
                }
                if !outcome.body_inserted {
                    warn!("Body anchor not found, body block skipped");
                }

                // Written even when neither anchor matched.
                if mode.writes() {
                    self.filesystem.write_file(&path, &content)?;
                }
                info!(
                    import_inserted = outcome.import_inserted,
                    body_inserted = outcome.body_inserted,
                    "Patched entry file"
                );
                PatchStatus::Patched(outcome)
            }
        };

        Ok(PatchReport {
            target: target.clone(),
            status,
            dry_run: !mode.writes(),
        })
    }
}
