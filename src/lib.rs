// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod logging;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
