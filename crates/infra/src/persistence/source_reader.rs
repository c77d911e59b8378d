// crates/infra/src/persistence/source_reader.rs
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
};

use tally_shared_kernel::{IoError, IoResult, Source};

/// Opens sources for reading: files by path, standard input from an injected
/// stream.
pub struct SourceReader<I> {
    stdin: I,
}

impl<I: Read> SourceReader<I> {
    pub fn new(stdin: I) -> Self {
        Self { stdin }
    }

    /// Opens `source` with buffered reading.
    ///
    /// The returned handle closes the file when dropped. Standard input is
    /// borrowed, never closed, so a later `-` sees whatever remains of it.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Open`] if the file cannot be opened.
    pub fn open(&mut self, source: &Source) -> IoResult<Box<dyn BufRead + '_>> {
        match source {
            Source::Stdin => Ok(Box::new(BufReader::new(&mut self.stdin))),
            Source::File(path) => {
                let file = File::open(path).map_err(|e| IoError::Open {
                    input: source.clone(),
                    source: e,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}
