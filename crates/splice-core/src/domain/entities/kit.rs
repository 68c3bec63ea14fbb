use crate::domain::{
    entities::{common::RelativePath, patch_plan::PatchPlan, scaffold_plan::ScaffoldPlan},
    error::DomainError,
};

/// A scaffold plan and the patch that wires its files into the project.
#[derive(Debug, Clone)]
pub struct Kit {
    pub name: String,
    pub scaffold: ScaffoldPlan,
    pub patch: PatchPlan,
    /// Entry file the kit patches, when it insists on one.
    pub target: Option<RelativePath>,
    pub notes: KitNotes,
}

/// Follow-up instructions printed after each operation succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KitNotes {
    pub scaffold: Vec<String>,
    pub patch: Vec<String>,
}

impl Kit {
    pub fn new(name: impl Into<String>, scaffold: ScaffoldPlan, patch: PatchPlan) -> Self {
        Self {
            name: name.into(),
            scaffold,
            patch,
            target: None,
            notes: KitNotes::default(),
        }
    }

    pub fn with_target(mut self, target: RelativePath) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_notes(mut self, notes: KitNotes) -> Self {
        self.notes = notes;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidKit("kit name cannot be empty".into()));
        }
        self.scaffold.validate()
    }
}
