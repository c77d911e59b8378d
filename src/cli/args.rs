// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
///
/// Column order is fixed (lines, words, chars, bytes, max line length) no
/// matter which order the flags are given in.
#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version = crate::VERSION,
    about = "Print newline, word, character and byte counts for each FILE",
    long_about = "Print newline, word, character and byte counts for each FILE, \
                  and a total line if more than one FILE is specified.\n\n\
                  With no FILE, or when FILE is -, read standard input. \
                  Without any counting flag, print lines, words and bytes."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Print the newline counts
    #[arg(short = 'l', long = "lines")]
    pub lines: bool,

    /// Print the word counts (runs of letters)
    #[arg(short = 'w', long = "words")]
    pub words: bool,

    /// Print the character counts
    #[arg(short = 'm', long = "chars")]
    pub chars: bool,

    /// Print the byte counts
    #[arg(short = 'c', long = "bytes")]
    pub bytes: bool,

    /// Print the maximum display width
    #[arg(short = 'L', long = "max-line-length")]
    pub max_line_length: bool,

    /// Log debug diagnostics to standard error
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Files to count; `-` reads standard input
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}
