// crates/infra/src/measurement/counter.rs
use std::io::{BufRead, Read};

use tally_domain::{ResultRow, SelectedMetrics, Tally};
use tally_ports::SourceCounter;
use tally_shared_kernel::{IoError, IoResult, Source};

use crate::persistence::{LineReader, SourceReader};

/// Counts one already-open stream, feeding every fragment to every metric.
///
/// # Errors
///
/// Returns [`IoError::Read`] naming `source` if the stream fails mid-read.
pub fn count_reader<R: BufRead>(
    reader: R,
    source: &Source,
    metrics: &SelectedMetrics,
) -> IoResult<ResultRow> {
    let mut lines = LineReader::new(reader);
    let mut tally = Tally::new(metrics);

    while let Some(fragment) = lines.next_fragment().map_err(|e| IoError::Read {
        input: source.clone(),
        source: e,
    })? {
        tally.feed(fragment);
    }

    tracing::debug!(
        source = %source,
        fragments = lines.fragments_read(),
        counts = ?tally.counts(),
        "counted source"
    );
    Ok(tally.finish(source.clone()))
}

/// [`SourceCounter`] backed by the filesystem and an injected stdin stream.
pub struct StreamCounter<I> {
    sources: SourceReader<I>,
}

impl<I: Read> StreamCounter<I> {
    pub fn new(stdin: I) -> Self {
        Self { sources: SourceReader::new(stdin) }
    }
}

impl<I: Read> SourceCounter for StreamCounter<I> {
    fn count(&mut self, source: &Source, metrics: &SelectedMetrics) -> IoResult<ResultRow> {
        let reader = self.sources.open(source)?;
        tracing::debug!(source = %source, "opened source");
        // `reader` is consumed here and dropped (closing any file) on return.
        count_reader(reader, source, metrics)
    }
}
