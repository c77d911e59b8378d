// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod measurement;
pub mod persistence;

pub use measurement::{StreamCounter, count_reader};
pub use persistence::{LineReader, SourceReader};
