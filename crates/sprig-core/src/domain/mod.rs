// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Sprig.
//!
//! This module contains pure logic with no I/O. Filesystem concerns are
//! handled via the `Filesystem` port defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Planning never touches the filesystem
//! - **No external crates**: Only std library + thiserror + serde
//! - **Immutable values**: names, targets and templates never change once built
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod planner;
pub mod templates;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::scaffold_plan::{DirectoryToCreate, FileToWrite, ScaffoldEntry, ScaffoldPlan};

pub use error::{DomainError, ErrorCategory};

pub use planner::{PathPlanner, RootState};
pub use templates::{INIT_MARKER, TemplateName, TemplateSet};
pub use value_objects::{ProjectName, TargetDirectory};

pub use validation::DomainValidator;
