// crates/domain/src/model/tally.rs
use tally_shared_kernel::Source;

use crate::model::{ResultRow, SelectedMetrics};

/// Running per-metric accumulators for a single source.
#[derive(Debug, Clone)]
pub struct Tally<'m> {
    metrics: &'m SelectedMetrics,
    counts: Vec<usize>,
}

impl<'m> Tally<'m> {
    pub fn new(metrics: &'m SelectedMetrics) -> Self {
        let counts = metrics.iter().map(|m| m.identity()).collect();
        Self { metrics, counts }
    }

    /// Applies every selected metric to one line fragment.
    pub fn feed(&mut self, fragment: &[u8]) {
        for (count, metric) in self.counts.iter_mut().zip(self.metrics) {
            *count = metric.update(*count, fragment);
        }
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn finish(self, source: Source) -> ResultRow {
        ResultRow::new(source, self.counts)
    }
}
