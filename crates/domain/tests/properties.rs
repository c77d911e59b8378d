use proptest::prelude::*;
use tally_domain::{Aggregator, Metric, ResultRow, SelectedMetrics, Tally};
use tally_shared_kernel::Source;

fn selection() -> impl Strategy<Value = SelectedMetrics> {
    proptest::sample::subsequence(Metric::ALL.to_vec(), 1..=5)
        .prop_map(|m| SelectedMetrics::from_requested(&m).unwrap())
}

fn tally_bytes(metrics: &SelectedMetrics, input: &[u8]) -> ResultRow {
    let mut tally = Tally::new(metrics);
    for fragment in input.split_inclusive(|&b| b == b'\n') {
        tally.feed(fragment);
    }
    tally.finish(Source::Stdin)
}

proptest! {
    #[test]
    fn lines_equal_terminator_count(input in proptest::collection::vec(any::<u8>(), 0..512)) {
        let metrics = SelectedMetrics::from_requested(&[Metric::Lines, Metric::Bytes]).unwrap();
        let row = tally_bytes(&metrics, &input);
        let terminators = input.iter().filter(|&&b| b == b'\n').count();
        prop_assert_eq!(row.counts(), &[terminators, input.len()][..]);
    }

    #[test]
    fn every_row_matches_selection_length(
        metrics in selection(),
        input in "\\PC{0,64}(\n\\PC{0,64}){0,4}",
    ) {
        let row = tally_bytes(&metrics, input.as_bytes());
        prop_assert_eq!(row.counts().len(), metrics.len());
    }

    #[test]
    fn total_is_elementwise_combine(
        metrics in selection(),
        inputs in proptest::collection::vec("[a-z \n]{0,40}", 2..5),
    ) {
        let rows: Vec<ResultRow> = inputs.iter().map(|s| tally_bytes(&metrics, s.as_bytes())).collect();
        let total = Aggregator::total_row(&rows, &metrics).unwrap();
        prop_assert_eq!(total.counts().len(), metrics.len());

        for (column, metric) in metrics.iter().enumerate() {
            let column_values = rows.iter().map(|r| r.counts()[column]);
            let expected = match metric {
                Metric::MaxLineLength => column_values.max().unwrap_or(0),
                _ => column_values.sum(),
            };
            prop_assert_eq!(total.counts()[column], expected);
        }
    }

    #[test]
    fn tally_of_concatenation_matches_combined_totals(
        a in "[a-z \n]{0,40}",
        b in "[a-z \n]{0,40}\n",
    ) {
        // `b` ends with a terminator so splitting the joined text keeps fragment boundaries.
        let metrics = SelectedMetrics::from_requested(&Metric::ALL).unwrap();
        let a = format!("{a}\n");
        let joined = format!("{a}{b}");
        let whole = tally_bytes(&metrics, joined.as_bytes());
        let parts = [tally_bytes(&metrics, a.as_bytes()), tally_bytes(&metrics, b.as_bytes())];
        let total = Aggregator::total_row(&parts, &metrics).unwrap();
        prop_assert_eq!(whole.counts(), total.counts());
    }
}
