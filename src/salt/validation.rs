//! salt::validation - parameter guards for the salter.
use crate::salt::errors::{SaltError, SaltResult};

/// Check that `intensity` is finite and within `[0, 1]`.
///
/// Errors
/// ------
/// - `SaltError::InvalidIntensity { value }` otherwise.
pub fn validate_intensity(intensity: f64) -> SaltResult<()> {
    if intensity.is_finite() && (0.0..=1.0).contains(&intensity) {
        Ok(())
    } else {
        Err(SaltError::InvalidIntensity { value: intensity })
    }
}
