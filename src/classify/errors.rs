//! classify::errors - invalid classifier configuration.
//!
//! Classification itself never fails: degenerate series (zero variance, too
//! short for any candidate lag) simply map to `Random`. The only failure is a
//! threshold set that makes the decision rules meaningless, reported as
//! [`ClassifyError::InvalidThreshold`].

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// ClassifyError - rejected classifier threshold.
///
/// Variants
/// --------
/// - `InvalidThreshold { name, value, reason }`
///   `name` is the threshold field (`trend`, `direction` or `cyclic`),
///   `reason` the violated constraint.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    #[error("Invalid {name} threshold {value}: {reason}")]
    InvalidThreshold { name: &'static str, value: f64, reason: &'static str },
}

#[cfg(feature = "python-bindings")]
impl From<ClassifyError> for PyErr {
    fn from(err: ClassifyError) -> PyErr {
        PyValueError::new_err(format!("ClassifyError: {err}"))
    }
}
