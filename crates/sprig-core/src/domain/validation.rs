use crate::domain::{
    entities::ScaffoldPlan,
    error::DomainError,
    value_objects::ProjectName,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_name(raw: &str) -> Result<ProjectName, DomainError> {
        ProjectName::parse(raw)
    }

    pub fn validate_plan(plan: &ScaffoldPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
