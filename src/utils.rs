//! utils - conversion helpers for the PyO3 bridge.
//!
//! Everything here sits on the Python boundary: turning array-likes into
//! validated [`Series`] values and Python-side label arguments into
//! [`ShapeLabel`]s. Rust callers never need this module.
use crate::{classify::ShapeLabel, series::Series};
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

/// Borrow or copy a 1-D float64 view of a numpy array, pandas Series or
/// Python sequence.
#[inline]
pub fn extract_f64_array<'py>(py: Python<'py>, raw_data: &Bound<'py, PyAny>) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Build a raw [`Series`] from any supported Python array-like.
///
/// Errors
/// ------
/// - `TypeError` when the object is not a float sequence.
/// - `ValueError` for empty or non-finite data.
pub fn extract_series<'py>(py: Python<'py>, raw_data: &Bound<'py, PyAny>) -> PyResult<Series> {
    let arr = extract_f64_array(py, raw_data)?;
    let data = arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("data must be a 1-D contiguous float64 array or sequence"))?;
    Ok(Series::new(data.to_vec())?)
}

/// Resolve an optional Python label name and lag into a [`ShapeLabel`].
///
/// `None` means "classify the data", signalled by returning `Ok(None)`.
pub fn extract_label(label: Option<&str>, lag: Option<usize>) -> PyResult<Option<ShapeLabel>> {
    let Some(name) = label else {
        return Ok(None);
    };
    ShapeLabel::from_parts(name, lag).map(Some).ok_or_else(|| {
        PyValueError::new_err(format!(
            "invalid label {name:?} (expected 'trend', 'random', or 'cyclic' together with lag)"
        ))
    })
}
