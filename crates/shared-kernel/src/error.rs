// crates/shared-kernel/src/error.rs
use thiserror::Error;

use crate::value_objects::Source;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] IoError),
}

pub type Result<T> = std::result::Result<T, TallyError>;

/// Rejected metric or path configuration. Raised before any source is opened.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("empty path argument")]
    EmptyPath,

    #[error("metric '{metric}' selected more than once")]
    DuplicateMetric { metric: String },

    #[error("{0}")]
    Builder(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Failure while opening or reading a source, or while writing the report.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("Failed to open '{input}': {source}")]
    Open {
        input: Source,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{input}': {source}")]
    Read {
        input: Source,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },
}

impl IoError {
    /// The source that failed, if the failure was on the input side.
    pub const fn input(&self) -> Option<&Source> {
        match self {
            Self::Open { input, .. } | Self::Read { input, .. } => Some(input),
            Self::Write { .. } => None,
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;
