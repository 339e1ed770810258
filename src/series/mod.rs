//! series - validated numeric series and their summary statistics.
//!
//! Purpose
//! -------
//! Own the data model shared by every PSSG stage: the immutable [`Series`]
//! container tagged with the [`Stage`] that produced it, the validation that
//! guards its construction, and the [`SeriesStatistics`] summary used by the
//! classifier and the salter.
//!
//! Key behaviors
//! -------------
//! - [`Series::new`] rejects empty and non-finite input via
//!   [`validate_values`], returning [`SeriesError`].
//! - [`compute_statistics`] derives mean, population standard deviation,
//!   first-difference slope, directional consistency, value range and the
//!   autocorrelation function over lags `2..=min(256, n / 4)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every `Series` is non-empty and finite; stage transforms keep the length
//!   of their input.
//! - Statistics are pure functions of the series values and are never cached
//!   inside the series.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the surface as:
//!
//!   ```rust
//!   use pssg::series::{Series, compute_statistics};
//!
//!   let series = Series::new(vec![1.0, 2.0, 3.0]).unwrap();
//!   let stats = compute_statistics(&series);
//!   assert_eq!(stats.len(), 3);
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule: construction and iteration in
//!   [`data`], guards in [`validation`], messages in [`errors`] and the
//!   numerical summary in [`statistics`].

pub mod data;
pub mod errors;
pub mod statistics;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::{Series, SeriesIter, Stage};
pub use self::errors::{SeriesError, SeriesResult};
pub use self::statistics::{
    LagCorrelation, MAX_CANDIDATE_LAG, MIN_CANDIDATE_LAG, SeriesStatistics, autocorrelation,
    candidate_lags, compute_statistics,
};
pub use self::validation::validate_values;

pub mod prelude {
    pub use super::data::{Series, Stage};
    pub use super::errors::{SeriesError, SeriesResult};
    pub use super::statistics::{SeriesStatistics, compute_statistics};
}
