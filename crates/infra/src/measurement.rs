pub mod counter;

pub use counter::{StreamCounter, count_reader};
