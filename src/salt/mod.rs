//! salt - seeded, shape-aware noise injection.
//!
//! Purpose
//! -------
//! Turn a raw series into its `Salted` stage by adding a perturbation that
//! matches the series' shape: a reinforcing ramp for trends, an in-phase
//! sinusoid for cycles, uniform noise otherwise.
//!
//! Key behaviors
//! -------------
//! - [`salt`] validates the intensity, computes the amplitude
//!   `intensity × std` and dispatches on the [`ShapeLabel`](crate::classify::ShapeLabel).
//! - [`salt_with_statistics`] skips the statistics pass when the caller
//!   already has one.
//! - Output is bit-reproducible for identical `(series, label, intensity,
//!   seed)`.
//!
//! Conventions
//! -----------
//! - Defaults: intensity [`DEFAULT_INTENSITY`] = 0.15, seed
//!   [`DEFAULT_SEED`] = 42.

pub mod errors;
pub mod salter;
pub mod strategies;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{SaltError, SaltResult};
pub use self::salter::{DEFAULT_INTENSITY, DEFAULT_SEED, salt, salt_with_statistics};
pub use self::validation::validate_intensity;

pub mod prelude {
    pub use super::errors::{SaltError, SaltResult};
    pub use super::salter::salt;
}
