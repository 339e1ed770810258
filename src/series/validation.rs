//! series::validation - input guards for raw series values.
//!
//! Centralizes the checks performed before a [`Series`](crate::series::Series)
//! is built: the input must be non-empty and every value finite. Callers treat
//! `Ok(())` as a guarantee that these invariants hold for the whole array.

use crate::series::errors::{SeriesError, SeriesResult};
use ndarray::ArrayView1;

/// Validate raw series values.
///
/// Parameters
/// ----------
/// - `values`: `ArrayView1<f64>`
///   Candidate values in index order.
///
/// Returns
/// -------
/// `SeriesResult<()>`
///   `Ok(())` when the input is non-empty and finite.
///
/// Errors
/// ------
/// - `SeriesError::EmptySeries` when `values.len() == 0`.
/// - `SeriesError::NonFiniteValue { index, value }` for the first NaN/±∞.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use pssg::series::{validate_values, SeriesError};
/// assert!(validate_values(array![1.0, 2.0].view()).is_ok());
/// assert!(matches!(
///     validate_values(array![1.0, f64::NAN].view()),
///     Err(SeriesError::NonFiniteValue { index: 1, .. })
/// ));
/// ```
pub fn validate_values(values: ArrayView1<f64>) -> SeriesResult<()> {
    if values.is_empty() {
        return Err(SeriesError::EmptySeries);
    }

    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(SeriesError::NonFiniteValue { index, value });
        }
    }

    Ok(())
}
