//! salt::salter - seeded, shape-aware perturbation of a series.
//!
//! Purpose
//! -------
//! Produce the `Salted` stage of a series: the raw values plus a controlled
//! perturbation whose structure follows the series' [`ShapeLabel`] and whose
//! scale is `A = intensity × std`.
//!
//! Key behaviors
//! -------------
//! - Randomness comes only from `StdRng::seed_from_u64(seed)`; identical
//!   arguments give bit-identical output.
//! - `A = 0` (constant series or zero intensity) returns the input values
//!   unchanged.
//! - The perturbation generators live in [`strategies`](crate::salt::strategies).
//!
//! Invariants & assumptions
//! ------------------------
//! - Output length and index range equal the input's; output stage is
//!   `Salted`.
//! - `|salted[i] - raw[i]| ≤ 1.25·A` for every i.
//! - Salted values saturate at `±f64::MAX`; moving a finite raw value toward
//!   the bound never widens the gap above, so the output stays finite.
use crate::{
    classify::ShapeLabel,
    salt::{
        errors::SaltResult,
        strategies::{cyclic_perturbation, random_perturbation, trend_perturbation},
        validation::validate_intensity,
    },
    series::{Series, SeriesStatistics, Stage, compute_statistics},
};
use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

/// Default salt intensity (share of the series standard deviation).
pub const DEFAULT_INTENSITY: f64 = 0.15;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

/// Add shape-aware, seeded noise to a series.
///
/// Parameters
/// ----------
/// - `series`: `&Series`
///   Input series; not modified.
/// - `label`: `ShapeLabel`
///   Shape that selects the perturbation strategy.
/// - `intensity`: `f64`
///   Noise scale in `[0, 1]`, relative to the series standard deviation.
/// - `seed`: `u64`
///   Seed of the only random source.
///
/// Returns
/// -------
/// `SaltResult<Series>`
///   New `Salted` series of the same length.
///
/// Errors
/// ------
/// - `SaltError::InvalidIntensity` when `intensity` is non-finite or outside
///   `[0, 1]`.
/// - `SaltError::Series` if a salted value is not finite; saturation keeps
///   this from happening for validated input.
///
/// Examples
/// --------
/// ```rust
/// # use pssg::classify::ShapeLabel;
/// # use pssg::salt::salt;
/// # use pssg::series::Series;
/// let series = Series::new(vec![0.0, 2.0, 1.0, 3.0, 2.0]).unwrap();
/// let a = salt(&series, ShapeLabel::Random, 0.2, 9).unwrap();
/// let b = salt(&series, ShapeLabel::Random, 0.2, 9).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), series.len());
/// ```
pub fn salt(series: &Series, label: ShapeLabel, intensity: f64, seed: u64) -> SaltResult<Series> {
    validate_intensity(intensity)?;
    salt_with_statistics(series, &compute_statistics(series), label, intensity, seed)
}

/// Salt using statistics that were already computed for `series`.
///
/// Same contract as [`salt`]; `stats` must describe `series`.
pub fn salt_with_statistics(
    series: &Series, stats: &SeriesStatistics, label: ShapeLabel, intensity: f64, seed: u64,
) -> SaltResult<Series> {
    validate_intensity(intensity)?;

    let amplitude = intensity * stats.std_dev();
    if amplitude <= 0.0 {
        debug!(intensity, std_dev = stats.std_dev(), "zero salt amplitude; values unchanged");
        return Ok(series.derive(series.values().to_owned(), Stage::Salted)?);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let values = series.values();
    let perturbation = match label {
        ShapeLabel::Trend => {
            trend_perturbation(values.len(), stats.first_difference_mean(), amplitude, &mut rng)
        }
        ShapeLabel::Cyclic { lag } => cyclic_perturbation(values, lag, amplitude, &mut rng),
        ShapeLabel::Random => random_perturbation(values.len(), amplitude, &mut rng),
    };
    debug!(%label, amplitude, seed, "salting series");

    let salted = (&values + &perturbation).mapv_into(|v| v.clamp(-f64::MAX, f64::MAX));
    Ok(series.derive(salted, Stage::Salted)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::salt::{errors::SaltError, strategies::JITTER_SHARE};
    use std::f64::consts::PI;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Determinism and seed sensitivity.
    // - Length, stage and amplitude bounds for each shape.
    // - The zero-amplitude identity (zero intensity, constant input).
    // - Intensity validation.
    // -------------------------------------------------------------------------

    fn noisy_series() -> Series {
        Series::new(vec![0.3, -1.2, 0.8, 2.1, -0.4, 1.7, -2.2, 0.9, 0.1, -0.6]).unwrap()
    }

    fn max_abs_delta(a: &Series, b: &Series) -> f64 {
        a.iter().zip(b.iter()).map(|((_, x), (_, y))| (x - y).abs()).fold(0.0, f64::max)
    }

    #[test]
    fn random_salt_is_reproducible_for_same_seed() {
        let series = noisy_series();

        let a = salt(&series, ShapeLabel::Random, 0.5, 123).unwrap();
        let b = salt(&series, ShapeLabel::Random, 0.5, 123).unwrap();

        assert_eq!(a.to_vec(), b.to_vec());
        assert_eq!(a.stage(), Stage::Salted);
    }

    #[test]
    fn different_seeds_give_different_salt() {
        let series = noisy_series();

        let a = salt(&series, ShapeLabel::Random, 0.5, 1).unwrap();
        let b = salt(&series, ShapeLabel::Random, 0.5, 2).unwrap();

        assert_ne!(a.to_vec(), b.to_vec());
    }

    #[test]
    // Purpose
    // -------
    // Every strategy keeps the perturbation within its documented bound.
    //
    // Given
    // -----
    // - The same noisy series salted as Trend, Cyclic{4} and Random with
    //   intensity 0.4.
    //
    // Expect
    // ------
    // - Lengths preserved; max |Δ| ≤ 1.25·A for structured salt, ≤ A for
    //   random salt.
    fn salt_respects_amplitude_bounds() {
        let series = noisy_series();
        let amplitude = 0.4 * compute_statistics(&series).std_dev();

        for (label, bound) in [
            (ShapeLabel::Trend, (1.0 + JITTER_SHARE) * amplitude),
            (ShapeLabel::Cyclic { lag: 4 }, (1.0 + JITTER_SHARE) * amplitude),
            (ShapeLabel::Random, amplitude),
        ] {
            let salted = salt(&series, label, 0.4, 77).unwrap();

            assert_eq!(salted.len(), series.len());
            assert!(max_abs_delta(&series, &salted) <= bound + 1e-12, "{label}");
        }
    }

    #[test]
    fn zero_intensity_returns_input_values() {
        let series = noisy_series();

        let salted = salt(&series, ShapeLabel::Trend, 0.0, 5).unwrap();

        assert_eq!(salted.to_vec(), series.to_vec());
        assert_eq!(salted.stage(), Stage::Salted);
    }

    #[test]
    fn constant_series_is_returned_unchanged() {
        let series = Series::new(vec![2.5; 16]).unwrap();

        let salted = salt(&series, ShapeLabel::Random, 1.0, 5).unwrap();

        assert_eq!(salted.to_vec(), series.to_vec());
    }

    #[test]
    // Purpose
    // -------
    // Trend salt reinforces an increasing series: the end of the series is
    // pushed up more than the start.
    fn trend_salt_reinforces_direction() {
        let series = Series::new((0..20).map(f64::from).collect()).unwrap();

        let salted = salt(&series, ShapeLabel::Trend, 1.0, 8).unwrap();

        let first = salted.value_at(0).unwrap() - series.value_at(0).unwrap();
        let last = salted.value_at(19).unwrap() - series.value_at(19).unwrap();
        assert!(last > first);
    }

    #[test]
    // Purpose
    // -------
    // Cyclic salt is in phase with the series, so it amplifies the cycle.
    //
    // Given
    // -----
    // - sin(2πi/8 + 1.0), n = 64, labelled Cyclic{8}, intensity 1.
    //
    // Expect
    // ------
    // - Salted values correlate positively with the raw values after
    //   removing them, i.e. the perturbation points the same way.
    fn cyclic_salt_is_phase_aligned() {
        let series =
            Series::new((0..64).map(|i| (2.0 * PI * i as f64 / 8.0 + 1.0).sin()).collect()).unwrap();

        let salted = salt(&series, ShapeLabel::Cyclic { lag: 8 }, 1.0, 3).unwrap();

        let alignment: f64 =
            series.iter().zip(salted.iter()).map(|((_, raw), (_, s))| raw * (s - raw)).sum();
        assert!(alignment > 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Values near `f64::MAX` salt to finite values for every shape.
    //
    // Given
    // -----
    // - [MAX, -MAX, MAX, 0] and a 32-point alternating series at ±MAX,
    //   intensity 1.
    //
    // Expect
    // ------
    // - A finite spread, every salted value finite and within
    //   `[-MAX, MAX]`, and salting is still reproducible.
    fn salt_near_f64_max_stays_finite() {
        let m = f64::MAX;
        let short = Series::new(vec![m, -m, m, 0.0]).unwrap();
        let long = Series::new((0..32).map(|i| if i % 2 == 0 { m } else { -m }).collect()).unwrap();
        assert!(compute_statistics(&short).std_dev().is_finite());

        for series in [&short, &long] {
            for label in [ShapeLabel::Random, ShapeLabel::Trend, ShapeLabel::Cyclic { lag: 2 }] {
                let salted = salt(series, label, 1.0, 1).unwrap();

                assert!(salted.iter().all(|(_, v)| v.is_finite()), "{label}: {:?}", salted.to_vec());
                assert_eq!(salted, salt(series, label, 1.0, 1).unwrap());
            }
        }
    }

    #[test]
    fn invalid_intensity_is_rejected() {
        let series = noisy_series();

        let err = salt(&series, ShapeLabel::Random, 1.5, 1).unwrap_err();

        assert_eq!(err, SaltError::InvalidIntensity { value: 1.5 });
    }
}
