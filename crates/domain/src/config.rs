// crates/domain/src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use tally_shared_kernel::{ConfigError, ConfigResult, Source};

use crate::model::SelectedMetrics;
use crate::report::LabelPolicy;

/// Validated settings for one counting run.
///
/// Construct through [`ConfigBuilder`]; `build` rejects invalid input before
/// any source is touched.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(private, name = "build_unchecked"))]
pub struct Config {
    #[builder(default)]
    metrics: SelectedMetrics,
    #[builder(default, setter(each(name = "path", into)))]
    paths: Vec<PathBuf>,
}

impl ConfigBuilder {
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPath`] if any path argument is empty.
    pub fn build(&self) -> ConfigResult<Config> {
        let config = self
            .build_unchecked()
            .map_err(|e| ConfigError::Builder(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Sources resolved from a [`Config`], in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePlan {
    pub sources: Vec<Source>,
    pub labels: LabelPolicy,
}

impl Config {
    pub const fn metrics(&self) -> &SelectedMetrics {
        &self.metrics
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// No paths means a single, unlabeled standard-input source.
    pub fn source_plan(&self) -> SourcePlan {
        if self.paths.is_empty() {
            return SourcePlan { sources: vec![Source::Stdin], labels: LabelPolicy::Suppress };
        }
        SourcePlan {
            sources: self.paths.iter().map(Source::from_arg).collect(),
            labels: LabelPolicy::Show,
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.paths.iter().any(|p| p.as_os_str().is_empty()) {
            return Err(ConfigError::EmptyPath);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Metric;

    #[test]
    fn defaults_to_stdin_and_default_metrics() {
        let config = ConfigBuilder::default().build().unwrap();
        assert_eq!(config.metrics(), &SelectedMetrics::default());
        let plan = config.source_plan();
        assert_eq!(plan.sources, vec![Source::Stdin]);
        assert_eq!(plan.labels, LabelPolicy::Suppress);
    }

    #[test]
    fn paths_keep_order_and_show_labels() {
        let config = ConfigBuilder::default()
            .path("b.txt")
            .path("-")
            .path("a.txt")
            .build()
            .unwrap();
        let plan = config.source_plan();
        assert_eq!(
            plan.sources,
            vec![
                Source::File("b.txt".into()),
                Source::Stdin,
                Source::File("a.txt".into())
            ]
        );
        assert_eq!(plan.labels, LabelPolicy::Show);
    }

    #[test]
    fn explicit_metrics_are_kept() {
        let metrics = SelectedMetrics::from_requested(&[Metric::MaxLineLength]).unwrap();
        let config = ConfigBuilder::default().metrics(metrics.clone()).build().unwrap();
        assert_eq!(config.metrics(), &metrics);
    }

    #[test]
    fn empty_path_is_rejected() {
        let err = ConfigBuilder::default().path("a.txt").path("").build().unwrap_err();
        assert_eq!(err, ConfigError::EmptyPath);
    }
}
