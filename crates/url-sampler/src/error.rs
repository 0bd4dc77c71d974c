use std::num::ParseIntError;
use std::path::PathBuf;
use std::str::Utf8Error;
use thiserror::Error;

/// Why a single weight line was rejected.
#[derive(Debug, Error)]
pub enum WeightLineError {
    #[error("not valid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),
    #[error(transparent)]
    Int(#[from] ParseIntError),
}

/// Everything that can abort a generation run.
///
/// None of these are recovered from locally; the binary reports them and exits.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{source_name}:{line}: invalid weight {value:?}: {source}")]
    InputFormat {
        source_name: String,
        line: usize,
        value: String,
        #[source]
        source: WeightLineError,
    },

    #[error("{source_name}: weight file contains no weights")]
    EmptyWeights { source_name: String },

    #[error("{source_name}:{line}: total weight overflows u64")]
    WeightOverflow { source_name: String, line: usize },

    #[error("total weight is zero, cannot sample {requested} urls")]
    DegenerateDistribution { requested: usize },

    /// Internal invariant violation in the resolution walk.
    #[error("bug: {unresolved} of {requested} targets unresolved after walking all weights (total {total})")]
    UnresolvedTarget {
        unresolved: usize,
        requested: usize,
        total: u64,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
