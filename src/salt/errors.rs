//! salt::errors - failures of the salting stage.

use crate::series::SeriesError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type SaltResult<T> = Result<T, SaltError>;

/// SaltError - rejected salting parameters.
///
/// Variants
/// --------
/// - `InvalidIntensity { value }`
///   Intensity is non-finite or outside `[0, 1]`.
/// - `Series`
///   The salted values failed series validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SaltError {
    #[error("Salt intensity must be finite and within [0, 1]; got {value}")]
    InvalidIntensity { value: f64 },

    #[error(transparent)]
    Series(#[from] SeriesError),
}

#[cfg(feature = "python-bindings")]
impl From<SaltError> for PyErr {
    fn from(err: SaltError) -> PyErr {
        PyValueError::new_err(format!("SaltError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_intensity_message_includes_value() {
        let msg = SaltError::InvalidIntensity { value: 1.5 }.to_string();

        assert!(msg.contains("1.5"), "missing value in: {msg}");
    }
}
