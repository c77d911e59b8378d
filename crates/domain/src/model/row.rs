// crates/domain/src/model/row.rs
use std::fmt;

use tally_shared_kernel::Source;

/// Label printed after the counts of the synthesized total row.
pub const TOTAL_LABEL: &str = "total";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowLabel {
    Source(Source),
    Total,
}

impl RowLabel {
    #[inline]
    pub const fn is_stdin(&self) -> bool {
        match self {
            Self::Source(source) => source.is_stdin(),
            Self::Total => false,
        }
    }

    #[inline]
    pub const fn is_total(&self) -> bool {
        matches!(self, Self::Total)
    }
}

impl fmt::Display for RowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(source) => source.fmt(f),
            Self::Total => f.write_str(TOTAL_LABEL),
        }
    }
}

/// Counts for one source (or the total), positionally aligned with the
/// run's [`SelectedMetrics`](crate::model::SelectedMetrics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    counts: Vec<usize>,
    label: RowLabel,
}

impl ResultRow {
    pub fn new(source: Source, counts: Vec<usize>) -> Self {
        Self { counts, label: RowLabel::Source(source) }
    }

    pub fn total(counts: Vec<usize>) -> Self {
        Self { counts, label: RowLabel::Total }
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub const fn label(&self) -> &RowLabel {
        &self.label
    }
}
