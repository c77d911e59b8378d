// crates/domain/src/model/metric.rs
use std::fmt;
use std::sync::LazyLock;

use regex::bytes::Regex;

/// Line terminator recognised by every metric.
pub const LINE_TERMINATOR: u8 = b'\n';

// A word is a maximal run of Unicode letters, not a whitespace-delimited token.
static LETTER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+").expect("letter-run pattern is valid"));

// Each byte of an invalid sequence counts as one character.
fn codepoints(bytes: &[u8]) -> usize {
    bytes
        .utf8_chunks()
        .map(|chunk| chunk.valid().chars().count() + chunk.invalid().len())
        .sum()
}

/// One countable property of a source.
///
/// Declaration order is the canonical column order of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    Lines,
    Words,
    Chars,
    Bytes,
    MaxLineLength,
}

impl Metric {
    /// Every metric, in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Lines,
        Self::Words,
        Self::Chars,
        Self::Bytes,
        Self::MaxLineLength,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::Words => "words",
            Self::Chars => "chars",
            Self::Bytes => "bytes",
            Self::MaxLineLength => "max-line-length",
        }
    }

    /// Seed for [`Metric::combine`]. Counts are never negative, so zero also
    /// seeds the maximum.
    #[inline]
    pub const fn identity(self) -> usize {
        0
    }

    /// Folds one line fragment into the running count.
    ///
    /// A fragment carries its trailing `\n` unless it is the final,
    /// unterminated piece of the stream.
    pub fn update(self, acc: usize, fragment: &[u8]) -> usize {
        match self {
            Self::Lines => acc + usize::from(fragment.last() == Some(&LINE_TERMINATOR)),
            Self::Words => acc + LETTER_RUN.find_iter(fragment).count(),
            Self::Chars => acc + codepoints(fragment),
            Self::Bytes => acc + fragment.len(),
            Self::MaxLineLength => {
                let line = fragment.strip_suffix(&[LINE_TERMINATOR]).unwrap_or(fragment);
                acc.max(codepoints(line))
            }
        }
    }

    /// Merges one source's count into a running total.
    pub fn combine(self, total: usize, partial: usize) -> usize {
        match self {
            Self::Lines | Self::Words | Self::Chars | Self::Bytes => total + partial,
            Self::MaxLineLength => total.max(partial),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
