//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`counter`]: turning one [`Source`](tally_shared_kernel::Source) into a
//!   result row
//!
//! The use-case layer depends on these traits only, so it never touches a
//! file handle or stream directly.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod counter;

pub use counter::SourceCounter;
