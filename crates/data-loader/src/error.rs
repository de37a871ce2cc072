//! Error types for the data-loader crate.
//!
//! Every failure carries enough context (file, line, column) to point at the
//! offending spot in the seed file.

use thiserror::Error;

/// Errors that can occur while loading and parsing the award catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// The header line does not name a required column
    #[error("Missing column '{column}' in header of {file}")]
    MissingColumn { file: String, column: String },

    /// A data field had an invalid value
    #[error("Invalid value for {field} at line {line}: {value:?}")]
    InvalidValue {
        field: String,
        line: usize,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
