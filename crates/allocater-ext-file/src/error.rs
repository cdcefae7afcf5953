//! File layer error types.

use allocater_core::AllocError;
use thiserror::Error;

/// Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised while reading or writing CSV files.
#[derive(Debug, Error)]
pub enum FileError {
    /// The file could not be opened or created.
    #[error("Failed to access '{path}': {source}")]
    Io {
        /// File path or source label.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Malformed CSV (bad quoting, ragged rows, missing columns).
    #[error("CSV error in '{path}': {source}")]
    Csv {
        /// File path or source label.
        path: String,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// A numeric column could not be parsed.
    #[error("Invalid number in '{path}' line {line}, column '{column}': {value:?}")]
    Parse {
        /// File path or source label.
        path: String,
        /// 1-based line number.
        line: u64,
        /// Column name.
        column: String,
        /// Raw cell text.
        value: String,
    },

    /// The file parsed but its allocations are invalid.
    #[error(transparent)]
    Allocation(#[from] AllocError),
}

impl FileError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(
        path: impl Into<String>,
        line: u64,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            column: column.into(),
            value: value.into(),
        }
    }
}
