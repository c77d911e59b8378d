use std::io::Write;

use tally_domain::{Aggregator, Config, ResultRow, report};
use tally_ports::SourceCounter;
use tally_shared_kernel::{IoError, IoResult};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows written, including the total row when present.
    pub rows: usize,
    pub bytes_written: usize,
}

/// Counts every configured source and writes one report.
///
/// Sources are processed strictly in order. The first failure aborts the run
/// and nothing is written to the sink.
pub struct CountSources<'a> {
    counter: &'a mut dyn SourceCounter,
}

impl<'a> CountSources<'a> {
    pub fn new(counter: &'a mut dyn SourceCounter) -> Self {
        Self { counter }
    }

    /// # Errors
    ///
    /// Returns the first [`IoError`] raised while counting a source, or
    /// [`IoError::Write`] if the sink rejects the report.
    pub fn run(&mut self, config: &Config, sink: &mut dyn Write) -> IoResult<RunSummary> {
        let plan = config.source_plan();
        let metrics = config.metrics();

        let mut rows: Vec<ResultRow> = Vec::with_capacity(plan.sources.len() + 1);
        for source in &plan.sources {
            rows.push(self.counter.count(source, metrics)?);
        }

        if let Some(total) = Aggregator::total_row(&rows, metrics) {
            tracing::debug!(sources = rows.len(), "appending total row");
            rows.push(total);
        }

        let text = report::render(&rows, metrics, plan.labels);
        sink.write_all(text.as_bytes())
            .and_then(|()| sink.flush())
            .map_err(|e| IoError::Write { source: e })?;

        tracing::debug!(rows = rows.len(), bytes = text.len(), "report written");
        Ok(RunSummary { rows: rows.len(), bytes_written: text.len() })
    }
}
