//! smooth::errors - failures of the smoothing stage.
//!
//! Smoothing is total on valid series: outputs are convex combinations of
//! finite inputs. Apart from the `Series` guard on the output, every error
//! here is a rejected parameter (radius, pass count or kernel parameter),
//! detected before any window is evaluated.

use crate::series::SeriesError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type SmoothResult<T> = Result<T, SmoothError>;

/// SmoothError - invalid smoothing parameters.
///
/// Variants
/// --------
/// - `InvalidRadius { radius }`
///   The window radius is negative.
/// - `InvalidPasses { passes }`
///   Zero passes were requested.
/// - `InvalidParameter { name, value, reason }`
///   A kernel parameter (`alpha`, `sigma`, …) violates its constraint.
/// - `Series`
///   The smoothed values failed series validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SmoothError {
    #[error("Smoothing radius must be >= 0; got {radius}")]
    InvalidRadius { radius: i64 },

    #[error("Number of smoothing passes must be >= 1; got {passes}")]
    InvalidPasses { passes: usize },

    #[error("Invalid smoothing parameter {name} = {value}: {reason}")]
    InvalidParameter { name: &'static str, value: f64, reason: &'static str },

    #[error(transparent)]
    Series(#[from] SeriesError),
}

#[cfg(feature = "python-bindings")]
impl From<SmoothError> for PyErr {
    fn from(err: SmoothError) -> PyErr {
        PyValueError::new_err(format!("SmoothError: {err}"))
    }
}
