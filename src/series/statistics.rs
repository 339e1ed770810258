//! series::statistics - derived summary statistics for a series.
//!
//! Purpose
//! -------
//! Compute the immutable summary that drives shape classification and salt
//! scaling: level and spread, the first-difference slope estimate, the
//! directional consistency of adjacent steps, the value range, and the
//! autocorrelation function over a small set of candidate lags.
//!
//! Key behaviors
//! -------------
//! - [`compute_statistics`] is a pure read of a [`Series`]; the result owns no
//!   reference to the input and is never mutated.
//! - Mean and population standard deviation come from `statrs`.
//! - Autocorrelation at lag L is the Pearson correlation between
//!   `v[0..n-L)` and `v[L..n)`, evaluated for L in [`candidate_lags`].
//! - [`SeriesStatistics::cycle_peak`] reads the period off the first
//!   autocorrelation peak past the initial positive lobe, so slow cycles are
//!   not mistaken for short lags on the decaying lobe.
//! - Spread and correlation are computed on a copy divided by `max |v|` and
//!   rescaled, so values near `f64::MAX` cannot overflow into `inf`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are validated series (non-empty, finite), so every statistic is
//!   finite.
//! - Degenerate cases return zeros rather than NaN: first-difference mean and
//!   directional consistency are 0 for a single point, and a correlation is 0
//!   when either window has zero variance.
//!
//! Conventions
//! -----------
//! - Standard deviation uses the population (1/n) denominator.
//! - Candidate lags run from 2 through `min(MAX_CANDIDATE_LAG, n / 4)`;
//!   series shorter than 8 points have no candidate lags.
//! - `first_difference_mean` saturates at `±f64::MAX`; `trend_strength` is
//!   computed before rescaling and stays exact.
//!
//! Testing notes
//! -------------
//! - Unit tests check each statistic on hand-computable series, the candidate
//!   lag window, the zero-variance fallbacks, the peak rule of
//!   [`SeriesStatistics::cycle_peak`] on slow cycles and overflow-free
//!   statistics for values near `f64::MAX`.
use crate::{parallel::map_range, series::data::Series};
use ndarray::{Array1, ArrayView1, s};
use statrs::statistics::Statistics;
use std::ops::Range;

/// Smallest lag considered when searching for cycles.
pub const MIN_CANDIDATE_LAG: usize = 2;

/// Largest lag considered when searching for cycles.
///
/// Cycles up to this period are detectable once the series holds four of
/// them.
pub const MAX_CANDIDATE_LAG: usize = 256;

/// Slack allowed when comparing neighbouring correlations, so plateaus and
/// rounding noise resolve to the shorter lag.
pub(crate) const LAG_TIE_TOL: f64 = 1e-9;

/// Autocorrelation value at one lag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagCorrelation {
    pub lag: usize,
    pub correlation: f64,
}

/// SeriesStatistics - immutable summary of one series.
///
/// Fields
/// ------
/// - `len`: number of points.
/// - `mean`: arithmetic mean.
/// - `std_dev`: population standard deviation.
/// - `first_difference_mean`: mean of `v[i+1] - v[i]`; 0 when `len == 1`.
/// - `trend_strength`: `|first_difference_mean| / std_dev`, 0 when constant.
/// - `directional_consistency`: `max(share of rising steps, share of falling
///   steps)` over adjacent pairs, in `[0, 1]`; 0 when `len == 1`.
/// - `min`, `max`: value range.
/// - `autocorrelations`: one entry per candidate lag, ascending by lag.
/// - `lead_correlation`: autocorrelation at lag 1, the left neighbour of the
///   first candidate.
///
/// Invariants
/// ----------
/// - All fields are finite.
/// - `autocorrelations[k].lag == MIN_CANDIDATE_LAG + k`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStatistics {
    len: usize,
    mean: f64,
    std_dev: f64,
    first_difference_mean: f64,
    trend_strength: f64,
    directional_consistency: f64,
    min: f64,
    max: f64,
    autocorrelations: Vec<LagCorrelation>,
    lead_correlation: f64,
}

impl SeriesStatistics {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Population variance, saturating at `f64::MAX`.
    pub fn variance(&self) -> f64 {
        (self.std_dev * self.std_dev).min(f64::MAX)
    }

    pub fn first_difference_mean(&self) -> f64 {
        self.first_difference_mean
    }

    pub fn directional_consistency(&self) -> f64 {
        self.directional_consistency
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`, saturating at `f64::MAX`.
    pub fn range(&self) -> f64 {
        (self.max - self.min).min(f64::MAX)
    }

    pub fn autocorrelations(&self) -> &[LagCorrelation] {
        &self.autocorrelations
    }

    /// Normalized slope `|first_difference_mean| / std_dev`, or 0 for a
    /// constant series.
    pub fn trend_strength(&self) -> f64 {
        self.trend_strength
    }

    /// First autocorrelation peak above `min_correlation`, read as the period.
    ///
    /// Parameters
    /// ----------
    /// - `min_correlation`: `f64`
    ///   A peak must exceed this correlation to count.
    ///
    /// Returns
    /// -------
    /// `Option<LagCorrelation>`
    ///   The shortest candidate lag `L` that
    ///   - lies past the initial lobe, i.e. the autocorrelation has dropped
    ///     to `≤ 0` at some lag in `1..L`,
    ///   - is a local maximum: `r(L) ≥ r(L-1)` and `r(L) ≥ r(L+1)` (the last
    ///     candidate only needs the left comparison), up to `LAG_TIE_TOL`,
    ///   - and has `r(L) > min_correlation`.
    ///
    ///   `None` when there are no candidate lags, the autocorrelation never
    ///   leaves its initial lobe, or no peak is high enough.
    ///
    /// Notes
    /// -----
    /// - The autocorrelation of a cycle with period p decays from lag 0,
    ///   bottoms out near p/2 and peaks again at p; a global maximum over the
    ///   candidates would instead land on lag 2 whenever p is long.
    /// - Harmonics (2p, 3p, …) peak as high as p but come later, so the
    ///   fundamental wins.
    pub fn cycle_peak(&self, min_correlation: f64) -> Option<LagCorrelation> {
        let acf = &self.autocorrelations;
        let mut left = self.lead_correlation;
        let mut past_lobe = left <= 0.0;

        for (k, candidate) in acf.iter().enumerate() {
            let r = candidate.correlation;
            let rises = r + LAG_TIE_TOL >= left;
            let holds = acf.get(k + 1).map_or(true, |next| r + LAG_TIE_TOL >= next.correlation);
            if past_lobe && rises && holds && r > min_correlation {
                return Some(*candidate);
            }
            past_lobe |= r <= 0.0;
            left = r;
        }
        None
    }
}

/// Candidate lags `2..=min(MAX_CANDIDATE_LAG, n / 4)` for a series of length
/// `n`.
///
/// Empty when `n < 8`.
pub fn candidate_lags(n: usize) -> Range<usize> {
    let upper = MAX_CANDIDATE_LAG.min(n / 4);
    MIN_CANDIDATE_LAG..(upper + 1).max(MIN_CANDIDATE_LAG)
}

/// Compute the summary statistics of a series.
///
/// Parameters
/// ----------
/// - `series`: `&Series`
///   Any validated series (any stage).
///
/// Returns
/// -------
/// `SeriesStatistics`
///   Freshly computed summary; O(n · number of candidate lags). Every field
///   is finite, including for values near `f64::MAX`.
///
/// Panics
/// ------
/// - Never panics; a `Series` is non-empty and finite by construction.
///
/// Examples
/// --------
/// ```rust
/// # use pssg::series::{Series, compute_statistics};
/// let series = Series::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let stats = compute_statistics(&series);
/// assert_eq!(stats.mean(), 2.5);
/// assert_eq!(stats.first_difference_mean(), 1.0);
/// assert_eq!(stats.directional_consistency(), 1.0);
/// ```
pub fn compute_statistics(series: &Series) -> SeriesStatistics {
    let values = series.values();
    let n = values.len();

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let (scale, unit) = unit_scaled(values);
    let unit = unit.view();

    let unit_std = unit.iter().population_std_dev();
    let mean = unit.iter().mean() * scale;
    let std_dev = unit_std * scale;

    let (unit_difference_mean, directional_consistency) = difference_summary(values, scale);
    let first_difference_mean = (unit_difference_mean * scale).clamp(-f64::MAX, f64::MAX);
    let trend_strength = if unit_std > 0.0 { unit_difference_mean.abs() / unit_std } else { 0.0 };

    let autocorrelations = map_range(candidate_lags(n), |lag| LagCorrelation {
        lag,
        correlation: lagged_pearson(unit, lag),
    });
    let lead_correlation = if autocorrelations.is_empty() { 0.0 } else { lagged_pearson(unit, 1) };

    SeriesStatistics {
        len: n,
        mean,
        std_dev,
        first_difference_mean,
        trend_strength,
        directional_consistency,
        min,
        max,
        autocorrelations,
        lead_correlation,
    }
}

/// Pearson autocorrelation of `values` at `lag`.
///
/// Correlates `v[0..n-lag)` with `v[lag..n)`. Returns 0 when fewer than two
/// pairs remain or when either window is constant.
pub fn autocorrelation(values: ArrayView1<f64>, lag: usize) -> f64 {
    let (_, unit) = unit_scaled(values);
    lagged_pearson(unit.view(), lag)
}

/// `values / max |v|` together with the divisor; the divisor is 1 for an
/// all-zero input.
pub(crate) fn unit_scaled(values: ArrayView1<f64>) -> (f64, Array1<f64>) {
    let scale = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if scale > 0.0 && scale.is_finite() {
        (scale, values.mapv(|v| v / scale))
    } else {
        (1.0, values.to_owned())
    }
}

/// Autocorrelation of values already scaled into `[-1, 1]`.
fn lagged_pearson(values: ArrayView1<f64>, lag: usize) -> f64 {
    let n = values.len();
    if lag == 0 {
        return if n > 1 { 1.0 } else { 0.0 };
    }
    if n < lag + 2 {
        return 0.0;
    }
    let head = values.slice(s![..n - lag]);
    let tail = values.slice(s![lag..]);
    pearson(head, tail)
}

/// Mean of first differences divided by `scale`, and directional consistency.
///
/// Step directions are read from the unscaled values so that scaling never
/// merges two distinct neighbours into a flat step.
fn difference_summary(values: ArrayView1<f64>, scale: f64) -> (f64, f64) {
    let n = values.len();
    if n < 2 {
        return (0.0, 0.0);
    }
    let steps = (n - 1) as f64;

    let mut sum = 0.0;
    let mut rising = 0usize;
    let mut falling = 0usize;
    for (prev, next) in values.iter().zip(values.iter().skip(1)) {
        let delta = next - prev;
        sum += next / scale - prev / scale;
        if delta > 0.0 {
            rising += 1;
        } else if delta < 0.0 {
            falling += 1;
        }
    }

    (sum / steps, rising.max(falling) as f64 / steps)
}

/// Pearson correlation of two equal-length windows, clamped to [-1, 1].
fn pearson(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    let len = a.len() as f64;
    let mean_a = a.sum() / len;
    let mean_b = b.sum() / len;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    if var_a <= 0.0 || var_b <= 0.0 {
        return 0.0;
    }
    (cov / (var_a * var_b).sqrt()).clamp(-1.0, 1.0)
}
