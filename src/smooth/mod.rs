//! smooth - noise removal for salted series.
//!
//! Purpose
//! -------
//! Produce the `Smoothed` stage of the pipeline. The primary kernel is the
//! adaptive distance-weighted Solter smoother ([`smooth`],
//! [`smooth_passes`]); [`smooth_with`] selects among the alternative kernels
//! of [`SmoothingMethod`].
//!
//! Key behaviors
//! -------------
//! - All kernels preserve the series length and truncate windows at the
//!   boundaries, renormalizing their weights.
//! - Radius 0 is the identity for every window-based kernel.
//! - Parameters are validated up front and reported as [`SmoothError`].
//!
//! Conventions
//! -----------
//! - Radii are signed (`i64`) at the public surface so a negative radius is
//!   reported as an error instead of being unrepresentable.
//! - Defaults: radius [`DEFAULT_RADIUS`] = 2, passes [`DEFAULT_PASSES`] = 3.

pub mod errors;
pub mod kernels;
pub mod solter;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{SmoothError, SmoothResult};
pub use self::kernels::{SmoothingMethod, smooth_with};
pub use self::solter::{BASE_DECAY, DEFAULT_PASSES, DEFAULT_RADIUS, MAX_DECAY_GAIN, smooth, smooth_passes};
pub use self::validation::{validate_passes, validate_radius};

pub mod prelude {
    pub use super::errors::{SmoothError, SmoothResult};
    pub use super::kernels::{SmoothingMethod, smooth_with};
    pub use super::solter::{smooth, smooth_passes};
}
