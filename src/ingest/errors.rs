//! ingest::errors - failures while reading or writing series data files.

use crate::series::SeriesError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type IngestResult<T> = Result<T, IngestError>;

/// IngestError - CSV import/export failure.
///
/// Variants
/// --------
/// - `Io`: the file could not be opened, created or written.
/// - `Csv`: the CSV layer failed on the stream as a whole (bad rows are
///   skipped, not reported).
/// - `NoNumericData`: no row yielded a finite number.
/// - `AxisLengthMismatch { expected, actual }`: an export axis does not
///   match the series length.
/// - `Series`: the parsed values were rejected by the series constructor.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No numeric data found in input")]
    NoNumericData,

    #[error("Axis has {actual} entries but the series has {expected}")]
    AxisLengthMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Series(#[from] SeriesError),
}

#[cfg(feature = "python-bindings")]
impl From<IngestError> for PyErr {
    fn from(err: IngestError) -> PyErr {
        PyValueError::new_err(format!("IngestError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_mismatch_message_includes_both_lengths() {
        let msg = IngestError::AxisLengthMismatch { expected: 10, actual: 7 }.to_string();

        assert!(msg.contains("10") && msg.contains('7'));
    }
}
