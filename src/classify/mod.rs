//! classify - shape classification of numeric series.
//!
//! Purpose
//! -------
//! Label a series as `Trend`, `Cyclic { lag }` or `Random` so later stages
//! can treat it according to its structure.
//!
//! Key behaviors
//! -------------
//! - [`classify`] / [`classify_with`] compute statistics and apply the
//!   decision rules of [`classifier`]; [`classify_statistics`] reuses an
//!   existing [`SeriesStatistics`](crate::series::SeriesStatistics).
//! - [`ClassifierThresholds`] carries the three tunable thresholds and is
//!   validated on construction, reporting [`ClassifyError`].
//!
//! Conventions
//! -----------
//! - Classification never fails on a valid series; errors only arise from
//!   threshold validation.

pub mod classifier;
pub mod errors;
pub mod shape;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::classifier::{
    ClassifierThresholds, DEFAULT_CYCLIC_THRESHOLD, DEFAULT_DIRECTION_THRESHOLD, DEFAULT_TREND_THRESHOLD,
    classify, classify_statistics, classify_with,
};
pub use self::errors::{ClassifyError, ClassifyResult};
pub use self::shape::ShapeLabel;

pub mod prelude {
    pub use super::classifier::{ClassifierThresholds, classify, classify_with};
    pub use super::errors::{ClassifyError, ClassifyResult};
    pub use super::shape::ShapeLabel;
}
