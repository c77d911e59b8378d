// crates/domain/src/model/selection.rs
use std::slice;

use tally_shared_kernel::{ConfigError, ConfigResult};

use crate::model::Metric;

/// Columns printed when no metric is requested.
pub const DEFAULT_METRICS: [Metric; 3] = [Metric::Lines, Metric::Words, Metric::Bytes];

/// The metrics a run counts, always in canonical order and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectedMetrics(Vec<Metric>);

impl SelectedMetrics {
    /// Builds a selection from independent on/off switches.
    ///
    /// Falls back to [`DEFAULT_METRICS`] when every switch is off.
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn from_flags(lines: bool, words: bool, chars: bool, bytes: bool, max_line_length: bool) -> Self {
        let enabled = [lines, words, chars, bytes, max_line_length];
        let metrics: Vec<Metric> = Metric::ALL
            .into_iter()
            .zip(enabled)
            .filter_map(|(metric, on)| on.then_some(metric))
            .collect();
        if metrics.is_empty() { Self::default() } else { Self(metrics) }
    }

    /// Builds a selection from an arbitrary list, reordering it canonically.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateMetric`] if a metric appears twice.
    pub fn from_requested(requested: &[Metric]) -> ConfigResult<Self> {
        let mut metrics = requested.to_vec();
        metrics.sort_unstable();
        if let Some(pair) = metrics.windows(2).find(|w| w[0] == w[1]) {
            return Err(ConfigError::DuplicateMetric { metric: pair[0].name().to_string() });
        }
        if metrics.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self(metrics))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed selection.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn is_single(&self) -> bool {
        self.0.len() == 1
    }

    pub fn iter(&self) -> slice::Iter<'_, Metric> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Metric] {
        &self.0
    }
}

impl Default for SelectedMetrics {
    fn default() -> Self {
        Self(DEFAULT_METRICS.to_vec())
    }
}

impl<'a> IntoIterator for &'a SelectedMetrics {
    type Item = &'a Metric;
    type IntoIter = slice::Iter<'a, Metric>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_yield_default_set() {
        let selected = SelectedMetrics::from_flags(false, false, false, false, false);
        assert_eq!(selected.as_slice(), &[Metric::Lines, Metric::Words, Metric::Bytes]);
    }

    #[test]
    fn flags_follow_canonical_order() {
        let selected = SelectedMetrics::from_flags(true, false, true, false, true);
        assert_eq!(
            selected.as_slice(),
            &[Metric::Lines, Metric::Chars, Metric::MaxLineLength]
        );
    }

    #[test]
    fn requested_order_is_ignored() {
        let selected =
            SelectedMetrics::from_requested(&[Metric::MaxLineLength, Metric::Bytes, Metric::Words])
                .unwrap();
        assert_eq!(
            selected.as_slice(),
            &[Metric::Words, Metric::Bytes, Metric::MaxLineLength]
        );
    }

    #[test]
    fn empty_request_falls_back_to_default() {
        assert_eq!(SelectedMetrics::from_requested(&[]).unwrap(), SelectedMetrics::default());
    }

    #[test]
    fn duplicate_request_is_rejected() {
        let err = SelectedMetrics::from_requested(&[Metric::Words, Metric::Lines, Metric::Words])
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateMetric { metric: "words".into() });
    }

    #[test]
    fn single_metric_detection() {
        assert!(SelectedMetrics::from_flags(false, false, false, true, false).is_single());
        assert!(!SelectedMetrics::default().is_single());
    }
}
