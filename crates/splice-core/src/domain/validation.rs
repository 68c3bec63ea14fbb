use crate::domain::{
    entities::{Kit, ScaffoldPlan},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_kit(kit: &Kit) -> Result<(), DomainError> {
        kit.validate()
    }

    pub fn validate_scaffold_plan(plan: &ScaffoldPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
