pub mod scaffold_plan;

pub use crate::domain::DomainError;
pub use scaffold_plan::ScaffoldPlan;
