// crates/domain/src/report.rs
//! Column-aligned report rendering.
//!
//! Every count in a report is right-justified to one shared width. The width
//! follows the reference `wc` rules:
//!
//! 1. start at 1, or at 4 when several rows share a single metric column;
//! 2. grow to the widest decimal count in any row;
//! 3. in wide mode (several rows or several metrics) a standard-input row
//!    forces at least 7.
//!
//! Each step only raises the width, so the result does not depend on row order.

use std::fmt::Write;

use crate::model::{ResultRow, SelectedMetrics};

const BASE_WIDTH: usize = 1;
const SINGLE_METRIC_MULTI_ROW_WIDTH: usize = 4;
const STDIN_WIDE_WIDTH: usize = 7;

/// Whether source rows print their label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPolicy {
    /// Sole implicit standard input: counts only.
    Suppress,
    /// Explicit paths were given.
    Show,
}

/// Computes the shared right-justification width.
pub fn column_width(rows: &[ResultRow], metrics: &SelectedMetrics) -> usize {
    let multi_row = rows.len() > 1;
    let wide = multi_row || metrics.len() > 1;

    let start = if multi_row && metrics.is_single() {
        SINGLE_METRIC_MULTI_ROW_WIDTH
    } else {
        BASE_WIDTH
    };

    rows.iter().fold(start, |width, row| {
        let widest = row.counts().iter().map(|&c| decimal_digits(c)).max().unwrap_or(0);
        let width = width.max(widest);
        if wide && row.label().is_stdin() {
            width.max(STDIN_WIDE_WIDTH)
        } else {
            width
        }
    })
}

/// Renders every row, one line each, into a single buffer.
pub fn render(rows: &[ResultRow], metrics: &SelectedMetrics, labels: LabelPolicy) -> String {
    let width = column_width(rows, metrics);
    let mut out = String::new();
    for row in rows {
        debug_assert_eq!(row.counts().len(), metrics.len());
        let mut first = true;
        for count in row.counts() {
            if !first {
                out.push(' ');
            }
            first = false;
            // Writing into a String cannot fail.
            let _ = write!(out, "{count:>width$}");
        }
        if labels == LabelPolicy::Show || row.label().is_total() {
            let _ = write!(out, " {}", row.label());
        }
        out.push('\n');
    }
    out
}

fn decimal_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
