//! # Domain
//!
//! Pure counting and report logic for `tally`: metric definitions, result
//! rows, the total-row aggregator, the column formatter and the validated
//! run configuration. Nothing in this crate performs I/O.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod model;
pub mod report;

pub use analytics::Aggregator;
pub use config::{Config, ConfigBuilder, SourcePlan};
pub use model::{Metric, ResultRow, RowLabel, SelectedMetrics, Tally};
pub use report::LabelPolicy;
