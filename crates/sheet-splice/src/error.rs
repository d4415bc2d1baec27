//! Error types for the splice engine

use std::fmt;

use sheet_splice_csv::CsvError;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Grid axis named in index errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors raised by the splice actions
///
/// Every variant is turned into a failure [`Outcome`](crate::Outcome) at the
/// action boundary; none of them aborts the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed action input, or unknown worksheet
    #[error("{0}")]
    Validation(String),

    /// Malformed range specification
    #[error("Invalid range specification '{spec}': {reason}")]
    InvalidRange { spec: String, reason: String },

    /// More payload rows/columns than resolved target indices
    #[error("The data has {count} {axis}(s) but only {available} target {axis} index(es) were resolved")]
    IndexOutOfRange {
        axis: Axis,
        count: usize,
        available: usize,
    },

    /// The grid rejected a row shift; rows already shifted stay shifted
    #[error("Row shift failed: {0}")]
    ShiftFailure(#[source] sheet_splice_core::Error),

    /// The grid rejected a cell write
    #[error(transparent)]
    Core(#[from] sheet_splice_core::Error),

    /// CSV file could not be read or written
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// Workbook store failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Create a validation error with a message
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }

    pub(crate) fn invalid_range<S: Into<String>>(spec: &str, reason: S) -> Self {
        Error::InvalidRange {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }
}
