//! Application services - orchestrate use cases.
//!
//! `ScaffoldService` drives planning and materialization; the
//! `Materializer` applies a plan through the filesystem port.

pub mod materializer;
pub mod scaffold_service;

pub use materializer::{AppliedEntry, EntryOutcome, MaterializeReport, Materializer};
pub use scaffold_service::{ScaffoldReport, ScaffoldService};
