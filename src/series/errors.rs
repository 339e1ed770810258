//! series::errors - construction failures for numeric series.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias raised when raw values cannot be
//! turned into a [`Series`](crate::series::Series). These are the
//! "invalid series" failures of the pipeline: every stage operates on an
//! already-validated series, so this is the only place where malformed input
//! is rejected.
//!
//! Key behaviors
//! -------------
//! - Define [`SeriesResult`] and [`SeriesError`] for series construction.
//! - Attach human-readable `Display` messages carrying the offending index
//!   and value.
//! - Map errors to Python `ValueError` when the `python-bindings` feature is
//!   enabled.
//!
//! Testing notes
//! -------------
//! - Unit tests check that `Display` messages embed their payloads.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type SeriesResult<T> = Result<T, SeriesError>;

/// SeriesError - invalid input handed to the series constructor.
///
/// Variants
/// --------
/// - `EmptySeries`
///   No values were supplied. A series always holds at least one point.
/// - `NonFiniteValue { index, value }`
///   A value is NaN or ±∞; `index` is the first offending position.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    #[error("Input series is empty.")]
    EmptySeries,

    #[error("Value at index {index} is non-finite: {value}")]
    NonFiniteValue { index: usize, value: f64 },
}

#[cfg(feature = "python-bindings")]
impl From<SeriesError> for PyErr {
    fn from(err: SeriesError) -> PyErr {
        PyValueError::new_err(format!("SeriesError: {err}"))
    }
}
