//! Sprig Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sprig
//! Python project skeleton generator, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            sprig-cli (CLI)              │
//! │  (resolves --folder, collects the name) │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ScaffoldService, Materializer)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Filesystem)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     sprig-adapters (Infrastructure)     │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (PathPlanner, TemplateSet, ScaffoldPlan)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sprig_core::{
//!     application::ScaffoldService,
//!     domain::{ProjectName, TargetDirectory},
//! };
//!
//! # fn demo(filesystem: Box<dyn sprig_core::application::Filesystem>) -> sprig_core::error::SprigResult<()> {
//! let target = TargetDirectory::resolve("demo", std::env::current_dir().unwrap());
//! let name = ProjectName::parse("acme")?;
//!
//! let service = ScaffoldService::new(filesystem);
//! service.init(&target, &name)?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, EntryOutcome, PathKind, ScaffoldReport, ScaffoldService,
        ports::Filesystem,
    };
    pub use crate::domain::{
        PathPlanner, ProjectName, RootState, ScaffoldEntry, ScaffoldPlan, TargetDirectory,
        TemplateName, TemplateSet,
    };
    pub use crate::error::{SprigError, SprigResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
