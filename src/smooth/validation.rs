//! smooth::validation - parameter guards shared by all smoothing kernels.
use crate::smooth::errors::{SmoothError, SmoothResult};

/// Convert a signed radius into a window radius.
///
/// Errors
/// ------
/// - `SmoothError::InvalidRadius` when `radius < 0`.
pub fn validate_radius(radius: i64) -> SmoothResult<usize> {
    usize::try_from(radius).map_err(|_| SmoothError::InvalidRadius { radius })
}

/// Errors
/// ------
/// - `SmoothError::InvalidPasses` when `passes == 0`.
pub fn validate_passes(passes: usize) -> SmoothResult<()> {
    if passes == 0 {
        return Err(SmoothError::InvalidPasses { passes });
    }
    Ok(())
}

/// Require a finite, strictly positive kernel parameter.
pub fn validate_positive(name: &'static str, value: f64) -> SmoothResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SmoothError::InvalidParameter { name, value, reason: "must be finite and > 0" })
    }
}

/// Require a parameter in the open unit interval `(0, 1)`.
pub fn validate_unit_open(name: &'static str, value: f64) -> SmoothResult<()> {
    if value.is_finite() && value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(SmoothError::InvalidParameter { name, value, reason: "must lie in (0, 1)" })
    }
}
