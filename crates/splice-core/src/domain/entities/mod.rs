pub mod common;
pub mod kit;
pub mod patch_plan;
pub mod project_root;
pub mod scaffold_plan;

pub use crate::domain::DomainError;
pub use kit::{Kit, KitNotes};
pub use patch_plan::{PatchOutcome, PatchPlan};
pub use project_root::ProjectRoot;
pub use scaffold_plan::{FileSpec, ScaffoldPlan};
