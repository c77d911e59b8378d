// crates/infra/src/persistence/line_reader.rs
use std::io::{self, BufRead};

use tally_domain::model::LINE_TERMINATOR;

/// Splits a byte stream into line fragments, each keeping its terminator.
///
/// Only the final fragment may lack a terminator. The reader makes one forward
/// pass: once it reports end of stream (or an error) it yields nothing more.
/// No length limit is imposed on a single line.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    exhausted: bool,
    fragments: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, buf: Vec::new(), exhausted: false, fragments: 0 }
    }

    /// Returns the next fragment, `Ok(None)` at end of stream.
    ///
    /// # Errors
    ///
    /// Propagates any read failure from the underlying stream. End of stream
    /// is never an error.
    pub fn next_fragment(&mut self) -> io::Result<Option<&[u8]>> {
        if self.exhausted {
            return Ok(None);
        }
        self.buf.clear();
        let read = match self.inner.read_until(LINE_TERMINATOR, &mut self.buf) {
            Ok(read) => read,
            Err(e) => {
                self.exhausted = true;
                return Err(e);
            }
        };
        if read == 0 {
            self.exhausted = true;
            return Ok(None);
        }
        // An unterminated fragment can only come from end of stream.
        if self.buf.last() != Some(&LINE_TERMINATOR) {
            self.exhausted = true;
        }
        self.fragments += 1;
        Ok(Some(&self.buf))
    }

    pub const fn fragments_read(&self) -> usize {
        self.fragments
    }
}
