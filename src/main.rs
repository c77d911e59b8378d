use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tally::{cli::Args, logging};
use tally_core::Config;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tally: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    tracing::debug!(?config, "parsed configuration");

    let summary = tally_core::run_with_config(&config, io::stdin().lock(), io::stdout().lock())?;
    tracing::debug!(rows = summary.rows, "done");
    Ok(())
}
