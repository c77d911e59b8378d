use std::io::{Read, Write};

use tally_domain::Config;
use tally_infra::StreamCounter;
use tally_shared_kernel::Result;
use tally_usecase::{CountSources, RunSummary};

/// Runs one count with explicit input and output handles.
///
/// `input` backs every standard-input source; `output` receives the whole
/// report in a single write, or nothing at all if any source fails.
///
/// # Errors
///
/// Returns the first source failure, or a write failure on `output`.
pub fn run_with_config<I: Read, W: Write>(config: &Config, input: I, mut output: W) -> Result<RunSummary> {
    tracing::debug!(
        metrics = ?config.metrics().as_slice(),
        paths = config.paths().len(),
        "starting count"
    );
    let mut counter = StreamCounter::new(input);
    let summary = CountSources::new(&mut counter).run(config, &mut output)?;
    Ok(summary)
}
