//! Application layer for Sprig.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, Materializer)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Filesystem failure taxonomy
//!
//! The application layer drives the domain layer; planning rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    AppliedEntry, EntryOutcome, MaterializeReport, Materializer, ScaffoldReport, ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::{ApplicationError, PathKind};
