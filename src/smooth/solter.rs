//! smooth::solter - adaptive distance-weighted ("Solter") smoothing.
//!
//! Purpose
//! -------
//! Produce the `Smoothed` stage of a series by replacing each value with a
//! weighted average of its neighbours, where the weight decays with index
//! distance and the decay length adapts to the local variability.
//!
//! Key behaviors
//! -------------
//! - For index i the window is `max(0, i-r)..=min(n-1, i+r)`; windows are
//!   truncated at the boundaries and weights renormalize over what remains.
//! - Weight of neighbour j is `exp(-|i-j| / decay_i)` with
//!   `decay_i = BASE_DECAY · min(1 + var_window_i / var_series, MAX_DECAY_GAIN)`.
//!   Noisy windows get a longer decay and are flattened harder.
//! - Radius 0 and zero-variance input return an unchanged copy.
//! - Each output value depends only on the input, so the per-index work runs
//!   on rayon when the `parallel` feature is on.
//!
//! Invariants & assumptions
//! ------------------------
//! - Output length equals input length; output stage is `Smoothed`.
//! - Every output value is a convex combination of its window, hence lies in
//!   the window's `[min, max]`; results are clamped to that range so rounding
//!   cannot step outside it.
//! - Variances are taken on values divided by `max |v|`. Only their ratio
//!   matters, and the scaled copy cannot overflow near `f64::MAX`.
use crate::{
    parallel::map_range,
    series::{Series, Stage, statistics::unit_scaled},
    smooth::{
        errors::SmoothResult,
        validation::{validate_passes, validate_radius},
    },
};
use ndarray::{Array1, ArrayView1, s};

/// Decay length for a window as variable as the whole series (1 / α, α = 0.3).
pub const BASE_DECAY: f64 = 1.0 / 0.3;

/// Upper bound on the variance-driven decay multiplier.
pub const MAX_DECAY_GAIN: f64 = 4.0;

/// Default window radius (window of 5 points).
pub const DEFAULT_RADIUS: usize = 2;

/// Default number of passes.
pub const DEFAULT_PASSES: usize = 3;

/// Solter-smooth a series once.
///
/// Parameters
/// ----------
/// - `series`: `&Series`
///   Input series (usually the salted stage).
/// - `radius`: `i64`
///   Window half-width; the window spans up to `2·radius + 1` points.
///
/// Returns
/// -------
/// `SmoothResult<Series>`
///   New `Smoothed` series of the same length.
///
/// Errors
/// ------
/// - `SmoothError::InvalidRadius` when `radius < 0`.
///
/// Examples
/// --------
/// ```rust
/// # use pssg::series::Series;
/// # use pssg::smooth::smooth;
/// let series = Series::new(vec![1.0, 5.0, 1.0, 5.0, 1.0]).unwrap();
/// assert_eq!(smooth(&series, 0).unwrap().to_vec(), series.to_vec());
/// assert_eq!(smooth(&series, 10).unwrap().len(), 5);
/// assert!(smooth(&series, -1).is_err());
/// ```
pub fn smooth(series: &Series, radius: i64) -> SmoothResult<Series> {
    let radius = validate_radius(radius)?;
    Ok(series.derive(solter_pass(series.values(), radius), Stage::Smoothed)?)
}

/// Apply `passes` consecutive Solter passes.
///
/// Errors
/// ------
/// - `SmoothError::InvalidRadius` when `radius < 0`.
/// - `SmoothError::InvalidPasses` when `passes == 0`.
pub fn smooth_passes(series: &Series, radius: i64, passes: usize) -> SmoothResult<Series> {
    let radius = validate_radius(radius)?;
    validate_passes(passes)?;

    let mut values = solter_pass(series.values(), radius);
    for _ in 1..passes {
        values = solter_pass(values.view(), radius);
    }
    Ok(series.derive(values, Stage::Smoothed)?)
}

/// One Solter pass over raw values.
pub(crate) fn solter_pass(values: ArrayView1<f64>, radius: usize) -> Array1<f64> {
    let n = values.len();
    if radius == 0 || n < 2 {
        return values.to_owned();
    }
    let (_, unit) = unit_scaled(values);
    let var_series = population_variance(unit.view());
    if var_series <= 0.0 {
        return values.to_owned();
    }

    let smoothed = map_range(0..n, |i| {
        let (lo, hi) = window_bounds(i, radius, n);
        let gain = (1.0 + population_variance(unit.slice(s![lo..=hi])) / var_series).min(MAX_DECAY_GAIN);
        let decay = BASE_DECAY * gain;

        let weights: Vec<f64> = (lo..=hi).map(|j| (-(j.abs_diff(i) as f64) / decay).exp()).collect();
        convex_mean(values.slice(s![lo..=hi]), &weights)
    });
    Array1::from(smoothed)
}

/// Weighted mean of `window` with non-negative `weights` (not all zero).
///
/// Weights are normalized before they touch the values, so partial sums stay
/// within `max |v|`; the result is clamped to the window's range.
pub(crate) fn convex_mean(window: ArrayView1<f64>, weights: &[f64]) -> f64 {
    let total: f64 = weights.iter().sum();
    let (lo, hi) = window.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let mean = window.iter().zip(weights).fold(0.0, |acc, (&v, &w)| acc + (w / total) * v);
    mean.clamp(lo, hi)
}

/// Inclusive window `[lo, hi]` of radius `radius` around `i`, clipped to `0..n`.
pub(crate) fn window_bounds(i: usize, radius: usize, n: usize) -> (usize, usize) {
    (i.saturating_sub(radius), (i + radius).min(n - 1))
}

pub(crate) fn population_variance(values: ArrayView1<f64>) -> f64 {
    let len = values.len() as f64;
    if len == 0.0 {
        return 0.0;
    }
    let mean = values.sum() / len;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{series::compute_statistics, smooth::errors::SmoothError};
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Identity cases (radius 0, constant input, single point).
    // - Boundary truncation for radius larger than the series.
    // - Exact preservation of linear data in the interior and monotonicity.
    // - Variance reduction on noise and the multi-pass helper.
    // - Radius and pass validation.
    // -------------------------------------------------------------------------

    fn noise(seed: u64, len: usize) -> Series {
        let mut rng = StdRng::seed_from_u64(seed);
        Series::new((0..len).map(|_| rng.random_range(-1.0..=1.0)).collect()).unwrap()
    }

    #[test]
    fn radius_zero_is_identity() {
        let series = noise(1, 30);

        let smoothed = smooth(&series, 0).unwrap();

        assert_eq!(smoothed.to_vec(), series.to_vec());
        assert_eq!(smoothed.stage(), Stage::Smoothed);
    }

    #[test]
    fn constant_series_is_unchanged() {
        let series = Series::new(vec![3.0; 9]).unwrap();

        assert_eq!(smooth(&series, 3).unwrap().to_vec(), vec![3.0; 9]);
    }

    #[test]
    fn single_point_is_unchanged() {
        let series = Series::new(vec![-4.0]).unwrap();

        assert_eq!(smooth(&series, 2).unwrap().to_vec(), vec![-4.0]);
    }

    #[test]
    // Purpose
    // -------
    // A radius larger than the series truncates every window to the whole
    // series without out-of-range access.
    //
    // Given
    // -----
    // - n = 5, radius = 10.
    //
    // Expect
    // ------
    // - Output length 5, every value inside the input range.
    fn oversized_radius_truncates_windows() {
        let series = Series::new(vec![1.0, 4.0, 2.0, 8.0, 5.0]).unwrap();

        let smoothed = smooth(&series, 10).unwrap();

        assert_eq!(smoothed.len(), 5);
        assert!(smoothed.iter().all(|(_, v)| (1.0..=8.0).contains(&v)));
    }

    #[test]
    // Purpose
    // -------
    // Symmetric interior windows reproduce linear data exactly, and the
    // truncated edge windows pull the endpoints inward, so the output of an
    // increasing ramp stays non-decreasing.
    //
    // Given
    // -----
    // - [1, 2, …, 10], radius 1.
    //
    // Expect
    // ------
    // - Interior values unchanged; output non-decreasing.
    fn ramp_stays_monotonic() {
        let series = Series::new((1..=10).map(f64::from).collect()).unwrap();

        let smoothed = smooth(&series, 1).unwrap().to_vec();

        for i in 1..9 {
            assert_relative_eq!(smoothed[i], (i + 1) as f64, epsilon = 1e-12);
        }
        assert!(smoothed.windows(2).all(|w| w[0] <= w[1]));
        assert!(smoothed[0] > 1.0 && smoothed[9] < 10.0);
    }

    #[test]
    fn smoothing_noise_lowers_standard_deviation() {
        for seed in 0..10 {
            let series = noise(seed, 80);

            let smoothed = smooth(&series, 2).unwrap();

            assert!(
                compute_statistics(&smoothed).std_dev() < compute_statistics(&series).std_dev(),
                "seed = {seed}"
            );
        }
    }

    #[test]
    fn more_passes_smooth_more() {
        let series = noise(4, 100);

        let once = smooth_passes(&series, 2, 1).unwrap();
        let thrice = smooth_passes(&series, 2, 3).unwrap();

        assert_eq!(once.to_vec(), smooth(&series, 2).unwrap().to_vec());
        assert!(compute_statistics(&thrice).std_dev() < compute_statistics(&once).std_dev());
    }

    #[test]
    fn invalid_radius_and_passes_are_rejected() {
        let series = noise(2, 10);

        assert_eq!(smooth(&series, -1).unwrap_err(), SmoothError::InvalidRadius { radius: -1 });
        assert_eq!(smooth_passes(&series, 1, 0).unwrap_err(), SmoothError::InvalidPasses { passes: 0 });
    }

    #[test]
    // Purpose
    // -------
    // The adaptive decay depends on a variance ratio only, so scaling the
    // input up to near `f64::MAX` scales the output and nothing overflows.
    //
    // Given
    // -----
    // - 60 noise points v and the same points times 1e308.
    //
    // Expect
    // ------
    // - smooth(1e308·v) / 1e308 ≈ smooth(v) at every index.
    fn huge_values_smooth_like_their_scaled_copy() {
        let base = noise(6, 60);
        let huge = Series::new(base.iter().map(|(_, v)| v * 1e308).collect()).unwrap();

        let expected = smooth_passes(&base, 2, 3).unwrap();
        let got = smooth_passes(&huge, 2, 3).unwrap();

        for ((_, e), (_, g)) in expected.iter().zip(got.iter()) {
            assert!(g.is_finite());
            assert_relative_eq!(g / 1e308, e, epsilon = 1e-9);
        }
    }

    #[test]
    fn alternating_extremes_smooth_to_finite_values() {
        let m = f64::MAX;
        let series = Series::new((0..16).map(|i| if i % 2 == 0 { m } else { -m }).collect()).unwrap();

        let smoothed = smooth(&series, 2).unwrap();

        assert!(smoothed.iter().all(|(_, v)| v.is_finite()));
        assert!(smoothed.iter().skip(2).take(12).all(|(_, v)| v.abs() < m));
    }

    #[test]
    fn window_bounds_clip_to_series() {
        assert_eq!(window_bounds(0, 2, 10), (0, 2));
        assert_eq!(window_bounds(5, 2, 10), (3, 7));
        assert_eq!(window_bounds(9, 2, 10), (7, 9));
        assert_eq!(window_bounds(2, 10, 5), (0, 4));
    }
}
