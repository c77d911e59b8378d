//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: resolves sources, counts each one through the
//!   [`SourceCounter`](tally_ports::SourceCounter) port, appends the total
//!   row and writes the report
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::{CountSources, RunSummary};
