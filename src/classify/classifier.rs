//! classify::classifier - heuristic trend / cyclic / random classification.
//!
//! Purpose
//! -------
//! Map a series onto a [`ShapeLabel`] from its [`SeriesStatistics`], so the
//! salter can add perturbations that follow the series' own structure.
//!
//! Key behaviors
//! -------------
//! - Decision order is fixed: constant series → `Random`; trend tests →
//!   `Trend`; autocorrelation peak → `Cyclic { lag }`; otherwise `Random`.
//! - A trend is detected either from the normalized slope
//!   `|first_difference_mean| / std` or from the share of adjacent steps
//!   moving in the dominant direction. The second test keeps long monotonic
//!   series labelled `Trend`, since their normalized slope shrinks as 1/n.
//! - The cycle length is the first autocorrelation peak past the initial
//!   positive lobe over candidate lags `2..=min(256, n / 4)`
//!   ([`SeriesStatistics::cycle_peak`]); it must exceed the `cyclic`
//!   threshold. Ties resolve to the shortest lag.
//!
//! Invariants & assumptions
//! ------------------------
//! - Classification is deterministic and side-effect free apart from a
//!   `debug!` event describing the decision.
//! - Trend takes priority over Cyclic.
//!
//! Testing notes
//! -------------
//! - Unit tests cover each decision branch, threshold validation and the
//!   priority of `Trend` over `Cyclic`.
use crate::{
    classify::{
        errors::{ClassifyError, ClassifyResult},
        shape::ShapeLabel,
    },
    series::{Series, SeriesStatistics, compute_statistics},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default normalized-slope threshold for `Trend`.
pub const DEFAULT_TREND_THRESHOLD: f64 = 0.3;

/// Default directional-consistency threshold for `Trend`.
pub const DEFAULT_DIRECTION_THRESHOLD: f64 = 0.7;

/// Default autocorrelation threshold for `Cyclic`.
pub const DEFAULT_CYCLIC_THRESHOLD: f64 = 0.5;

/// ClassifierThresholds - decision thresholds of the shape classifier.
///
/// Fields
/// ------
/// - `trend`: `f64`
///   Minimum `|first_difference_mean| / std` for `Trend`; must be > 0.
/// - `direction`: `f64`
///   Minimum directional consistency for `Trend`; must lie in `(0.5, 1]`.
/// - `cyclic`: `f64`
///   Minimum autocorrelation peak for `Cyclic`; must lie in `(0, 1)`.
///
/// Notes
/// -----
/// - Deserialization fills missing fields from [`Default`], so a config file
///   may override a single threshold. Call [`ClassifierThresholds::validate`]
///   after deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierThresholds {
    pub trend: f64,
    pub direction: f64,
    pub cyclic: f64,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        ClassifierThresholds {
            trend: DEFAULT_TREND_THRESHOLD,
            direction: DEFAULT_DIRECTION_THRESHOLD,
            cyclic: DEFAULT_CYCLIC_THRESHOLD,
        }
    }
}

impl ClassifierThresholds {
    /// Build a validated threshold set.
    ///
    /// Errors
    /// ------
    /// - `ClassifyError::InvalidThreshold` when any value is non-finite or
    ///   outside its documented range.
    pub fn new(trend: f64, direction: f64, cyclic: f64) -> ClassifyResult<Self> {
        let thresholds = ClassifierThresholds { trend, direction, cyclic };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> ClassifyResult<()> {
        if !self.trend.is_finite() || self.trend <= 0.0 {
            return Err(ClassifyError::InvalidThreshold {
                name: "trend",
                value: self.trend,
                reason: "must be finite and > 0",
            });
        }
        if !self.direction.is_finite() || self.direction <= 0.5 || self.direction > 1.0 {
            return Err(ClassifyError::InvalidThreshold {
                name: "direction",
                value: self.direction,
                reason: "must lie in (0.5, 1]",
            });
        }
        if !self.cyclic.is_finite() || self.cyclic <= 0.0 || self.cyclic >= 1.0 {
            return Err(ClassifyError::InvalidThreshold {
                name: "cyclic",
                value: self.cyclic,
                reason: "must lie in (0, 1)",
            });
        }
        Ok(())
    }
}

/// Classify a series with the default thresholds.
///
/// Examples
/// --------
/// ```rust
/// # use pssg::classify::{ShapeLabel, classify};
/// # use pssg::series::Series;
/// let rising = Series::new((1..=10).map(f64::from).collect()).unwrap();
/// assert_eq!(classify(&rising), ShapeLabel::Trend);
///
/// let flat = Series::new(vec![2.0; 12]).unwrap();
/// assert_eq!(classify(&flat), ShapeLabel::Random);
/// ```
pub fn classify(series: &Series) -> ShapeLabel {
    classify_with(series, &ClassifierThresholds::default())
}

/// Classify a series with explicit thresholds.
pub fn classify_with(series: &Series, thresholds: &ClassifierThresholds) -> ShapeLabel {
    classify_statistics(&compute_statistics(series), thresholds)
}

/// Classify from precomputed statistics.
///
/// Lets the pipeline reuse one statistics pass for classification, salting
/// and reporting.
pub fn classify_statistics(stats: &SeriesStatistics, thresholds: &ClassifierThresholds) -> ShapeLabel {
    if stats.std_dev() <= 0.0 {
        debug!(len = stats.len(), "constant series classified as random");
        return ShapeLabel::Random;
    }

    let strength = stats.trend_strength();
    let consistency = stats.directional_consistency();
    if strength > thresholds.trend || consistency > thresholds.direction {
        debug!(strength, consistency, "trend detected");
        return ShapeLabel::Trend;
    }

    if let Some(peak) = stats.cycle_peak(thresholds.cyclic) {
        debug!(lag = peak.lag, correlation = peak.correlation, "cycle detected");
        return ShapeLabel::Cyclic { lag: peak.lag };
    }

    debug!(strength, consistency, "no structure detected; classified as random");
    ShapeLabel::Random
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::f64::consts::PI;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Each decision branch of `classify_statistics`.
    // - Trend detection for long monotonic series via directional consistency.
    // - Trend priority over Cyclic.
    // - `ClassifierThresholds::new` validation.
    // -------------------------------------------------------------------------

    fn series(values: Vec<f64>) -> Series {
        Series::new(values).unwrap()
    }

    fn sinusoid(period: f64, len: usize) -> Series {
        series((0..len).map(|i| (2.0 * PI * i as f64 / period).sin()).collect())
    }

    #[test]
    fn increasing_ramp_is_trend() {
        let ramp = series((1..=10).map(f64::from).collect());

        assert_eq!(classify(&ramp), ShapeLabel::Trend);
    }

    #[test]
    // Purpose
    // -------
    // A long strictly increasing series stays `Trend` even though its
    // normalized slope falls below the slope threshold.
    //
    // Given
    // -----
    // - v[i] = i for i in 0..200 → |Δ̄| / std ≈ 0.017.
    //
    // Expect
    // ------
    // - `Trend` via directional consistency = 1.
    fn long_monotonic_series_is_trend() {
        let ramp = series((0..200).map(|i| i as f64).collect());
        let stats = compute_statistics(&ramp);

        assert!(stats.trend_strength() < DEFAULT_TREND_THRESHOLD);
        assert_eq!(classify(&ramp), ShapeLabel::Trend);
    }

    #[test]
    fn decreasing_series_is_trend() {
        let falling = series((0..30).map(|i| 100.0 - 2.5 * i as f64).collect());

        assert_eq!(classify(&falling), ShapeLabel::Trend);
    }

    #[test]
    // Purpose
    // -------
    // A clean sinusoid is `Cyclic` with its own period as lag.
    //
    // Given
    // -----
    // - sin(2πi/8), n = 64.
    //
    // Expect
    // ------
    // - `Cyclic { lag: 8 }`.
    fn sinusoid_is_cyclic_with_its_period() {
        assert_eq!(classify(&sinusoid(8.0, 64)), ShapeLabel::Cyclic { lag: 8 });
    }

    #[test]
    fn sinusoid_with_fractional_period_lands_within_one_lag() {
        let label = classify(&sinusoid(10.5, 84));

        let lag = label.lag().unwrap();
        assert!((9..=12).contains(&lag), "lag = {lag}");
    }

    #[test]
    // Purpose
    // -------
    // Long periods keep their own lag instead of collapsing to lag 2.
    //
    // Given
    // -----
    // - sin(2πi/p) for p in 21..=40, four periods each.
    //
    // Expect
    // ------
    // - `Cyclic` with lag within one of p.
    fn slow_sinusoid_is_cyclic_with_its_period() {
        for period in 21..=40 {
            let label = classify(&sinusoid(period as f64, 4 * period));

            let lag = label.lag().unwrap_or_else(|| panic!("period {period}: got {label}"));
            assert!(lag.abs_diff(period) <= 1, "period {period}: lag {lag}");
        }
    }

    #[test]
    fn constant_series_is_random() {
        assert_eq!(classify(&series(vec![4.0; 40])), ShapeLabel::Random);
    }

    #[test]
    fn bounded_noise_is_random() {
        let mut rng = StdRng::seed_from_u64(7);
        let noise = series((0..120).map(|_| rng.random_range(-1.0..=1.0)).collect());

        assert_eq!(classify(&noise), ShapeLabel::Random);
    }

    #[test]
    // Purpose
    // -------
    // Trend is checked before Cyclic.
    //
    // Given
    // -----
    // - A steep ramp plus a small sinusoid; the ramp dominates every step.
    //
    // Expect
    // ------
    // - `Trend`.
    fn trend_takes_priority_over_cycle() {
        let values = (0..64).map(|i| i as f64 + 0.2 * (2.0 * PI * i as f64 / 8.0).sin()).collect();

        assert_eq!(classify(&series(values)), ShapeLabel::Trend);
    }

    #[test]
    fn short_series_without_trend_is_random() {
        let zigzag = series(vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);

        assert_eq!(classify(&zigzag), ShapeLabel::Random);
    }

    #[test]
    fn thresholds_new_accepts_defaults() {
        let thresholds = ClassifierThresholds::new(0.3, 0.7, 0.5).unwrap();

        assert_eq!(thresholds, ClassifierThresholds::default());
    }

    #[test]
    fn thresholds_new_rejects_out_of_range_values() {
        assert!(matches!(
            ClassifierThresholds::new(0.0, 0.7, 0.5),
            Err(ClassifyError::InvalidThreshold { name: "trend", .. })
        ));
        assert!(matches!(
            ClassifierThresholds::new(0.3, 0.5, 0.5),
            Err(ClassifyError::InvalidThreshold { name: "direction", .. })
        ));
        assert!(matches!(
            ClassifierThresholds::new(0.3, 0.7, 1.0),
            Err(ClassifyError::InvalidThreshold { name: "cyclic", .. })
        ));
        assert!(ClassifierThresholds::new(f64::NAN, 0.7, 0.5).is_err());
    }

    #[test]
    fn stricter_cyclic_threshold_demotes_weak_cycle() {
        let mut rng = StdRng::seed_from_u64(11);
        let values =
            (0..80).map(|i| (2.0 * PI * i as f64 / 10.0).sin() + rng.random_range(-1.0..=1.0)).collect();
        let noisy = series(values);
        let strict = ClassifierThresholds::new(0.3, 0.7, 0.99).unwrap();

        assert_eq!(classify_with(&noisy, &strict), ShapeLabel::Random);
    }
}
