// crates/shared-kernel/src/value_objects/source.rs
use std::fmt;
use std::path::{Path, PathBuf};

/// Path argument that names standard input.
pub const STDIN_MARKER: &str = "-";

/// One input to be counted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    /// The injected standard-input stream.
    Stdin,
    /// A file opened by path.
    File(PathBuf),
}

impl Source {
    /// Resolves a path argument, mapping `-` to standard input.
    pub fn from_arg(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.as_os_str() == STDIN_MARKER {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    #[inline]
    pub const fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str(STDIN_MARKER),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
