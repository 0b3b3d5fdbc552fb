//! Report loading errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open '{path}': {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV parse error at line {line}: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("CSV header error: {0}")]
    Header(csv::Error),
}

/// Result type alias for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;
