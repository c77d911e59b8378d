// src/cli/config.rs
use tally_core::{Config, ConfigBuilder, ConfigError, SelectedMetrics};

use crate::cli::Args;

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let metrics = SelectedMetrics::from_flags(
            args.lines,
            args.words,
            args.chars,
            args.bytes,
            args.max_line_length,
        );
        ConfigBuilder::default().metrics(metrics).paths(args.files).build()
    }
}
