//! Error types for dataset loading.

use std::path::PathBuf;

use org_chart::ModelError;
use thiserror::Error;

/// Errors that can occur while loading a dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The input file could not be opened.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row has fewer than the four expected columns.
    #[error("line {line}: missing field `{field}`")]
    MissingField {
        /// 1-based line number in the input.
        line: u64,
        /// Column name.
        field: &'static str,
    },

    /// A numeric column did not hold an integer.
    #[error("line {line}: invalid integer in `{field}`: {value:?}")]
    InvalidInteger {
        /// 1-based line number in the input.
        line: u64,
        /// Column name.
        field: &'static str,
        /// Raw field text.
        value: String,
    },

    /// A row parsed but failed record validation.
    #[error("line {line}: {source}")]
    InvalidRecord {
        /// 1-based line number in the input.
        line: u64,
        /// Validation failure.
        #[source]
        source: ModelError,
    },
}

impl LoadError {
    /// Creates an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for loader operations.
pub type LoadResult<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_field() {
        let err = LoadError::MissingField {
            line: 4,
            field: "designation",
        };
        assert_eq!(err.to_string(), "line 4: missing field `designation`");
    }

    #[test]
    fn test_error_display_invalid_integer() {
        let err = LoadError::InvalidInteger {
            line: 2,
            field: "manager_id",
            value: "ten".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 2: invalid integer in `manager_id`: \"ten\""
        );
    }

    #[test]
    fn test_error_display_invalid_record() {
        let err = LoadError::InvalidRecord {
            line: 5,
            source: ModelError::SelfManaged(30),
        };
        assert_eq!(
            err.to_string(),
            "line 5: employee 30 is listed as their own manager"
        );
    }

    #[test]
    fn test_error_display_io() {
        let err = LoadError::io_error(
            "org_data.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "I/O error at org_data.csv: not found");
    }
}
