//! Library facade for the `tally` binary.
//!
//! Wires the filesystem adapters into the counting use case and re-exports the
//! types a caller needs to configure and run it.

#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;

pub use bootstrap::run_with_config;
pub use tally_domain::{Config, ConfigBuilder, Metric, SelectedMetrics};
pub use tally_shared_kernel::{ConfigError, IoError, Result, Source, TallyError};
pub use tally_usecase::RunSummary;
