// crates/shared-kernel/src/value_objects/mod.rs
pub mod source;

pub use source::Source;
