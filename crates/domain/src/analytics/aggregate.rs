use crate::model::{ResultRow, SelectedMetrics};

/// Folds per-source rows into the synthesized total row.
pub struct Aggregator;

impl Aggregator {
    /// Returns the total row, or `None` when fewer than two rows were counted.
    pub fn total_row(rows: &[ResultRow], metrics: &SelectedMetrics) -> Option<ResultRow> {
        if rows.len() < 2 {
            return None;
        }
        Some(Self::combine_all(rows, metrics))
    }

    fn combine_all(rows: &[ResultRow], metrics: &SelectedMetrics) -> ResultRow {
        let counts = metrics
            .iter()
            .enumerate()
            .map(|(column, metric)| {
                rows.iter()
                    .map(|row| row.counts()[column])
                    .fold(metric.identity(), |total, partial| metric.combine(total, partial))
            })
            .collect();
        ResultRow::total(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Metric;
    use tally_shared_kernel::Source;

    fn row(path: &str, counts: &[usize]) -> ResultRow {
        ResultRow::new(Source::from_arg(path), counts.to_vec())
    }

    #[test]
    fn single_row_has_no_total() {
        let metrics = SelectedMetrics::default();
        assert!(Aggregator::total_row(&[row("a", &[1, 2, 3])], &metrics).is_none());
        assert!(Aggregator::total_row(&[], &metrics).is_none());
    }

    #[test]
    fn sums_and_maximum_per_column() {
        let metrics = SelectedMetrics::from_requested(&Metric::ALL).unwrap();
        let rows = [row("a", &[3, 5, 20, 22, 9]), row("b", &[1, 4, 11, 11, 12])];
        let total = Aggregator::total_row(&rows, &metrics).unwrap();
        assert_eq!(total.counts(), &[4, 9, 31, 33, 12]);
        assert!(total.label().is_total());
        assert_eq!(total.label().to_string(), "total");
    }

    #[test]
    fn three_rows_fold_in_order() {
        let metrics = SelectedMetrics::from_requested(&[Metric::MaxLineLength]).unwrap();
        let rows = [row("a", &[7]), row("-", &[2]), row("c", &[5])];
        let total = Aggregator::total_row(&rows, &metrics).unwrap();
        assert_eq!(total.counts(), &[7]);
    }
}
