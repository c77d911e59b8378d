// crates/ports/src/counter.rs
use tally_domain::{ResultRow, SelectedMetrics};
use tally_shared_kernel::{IoResult, Source};

/// Port for counting a single source.
///
/// Implementations open the source, consume it completely, and release it
/// before returning, on success and on failure alike.
pub trait SourceCounter {
    /// # Errors
    ///
    /// Returns an [`IoError`](tally_shared_kernel::IoError) naming `source`
    /// if it cannot be opened or a read fails.
    fn count(&mut self, source: &Source, metrics: &SelectedMetrics) -> IoResult<ResultRow>;
}
