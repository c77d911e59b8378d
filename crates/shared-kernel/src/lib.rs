// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{ConfigError, ConfigResult, IoError, IoResult, Result, TallyError};

pub mod error;
pub mod value_objects;

pub use value_objects::Source;
