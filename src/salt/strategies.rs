//! salt::strategies - shape-specific perturbation generators.
//!
//! Each generator returns an additive perturbation of length `n` scaled by
//! the amplitude `A`. Generators draw only from the `StdRng` they are given;
//! they never create their own randomness. Each value is `A` times a unit
//! shape, so a perturbation may overflow to `±inf` but never to NaN.
//!
//! | Shape   | Perturbation                                         | Bound      |
//! |---------|------------------------------------------------------|------------|
//! | Trend   | `sign(Δ̄)·A·i/(n-1)` + `0.25·A·U(-1,1)`              | `1.25·A`   |
//! | Cyclic  | `A·sin(2πi/lag + φ)` + `0.25·A·U(-1,1)`              | `1.25·A`   |
//! | Random  | `A·U(-1,1)`                                          | `A`        |
use crate::series::statistics::unit_scaled;
use ndarray::{Array1, ArrayView1};
use rand::{Rng, rngs::StdRng};
use std::f64::consts::PI;

/// Jitter amplitude, relative to `A`, added on top of structured salt.
pub const JITTER_SHARE: f64 = 0.25;

/// Shortest period a cyclic perturbation may use.
pub const MIN_CYCLE_LAG: usize = 2;

/// Linear ramp that reinforces the existing drift, plus jitter.
///
/// `first_difference_mean` only contributes its sign; a flat drift ramps
/// upward. A single point gets jitter only.
pub fn trend_perturbation(n: usize, first_difference_mean: f64, amplitude: f64, rng: &mut StdRng) -> Array1<f64> {
    let direction = if first_difference_mean < 0.0 { -1.0 } else { 1.0 };
    let span = n.saturating_sub(1).max(1) as f64;
    Array1::from_shape_fn(n, |i| amplitude * (direction * (i as f64 / span) + jitter(rng)))
}

/// Sinusoid at period `lag`, phase-aligned with the series, plus jitter.
///
/// The phase comes from [`cycle_phase`]; lags below `MIN_CYCLE_LAG` are
/// raised to it.
pub fn cyclic_perturbation(values: ArrayView1<f64>, lag: usize, amplitude: f64, rng: &mut StdRng) -> Array1<f64> {
    let lag = lag.max(MIN_CYCLE_LAG);
    let phase = cycle_phase(values, lag);
    let omega = 2.0 * PI / lag as f64;
    Array1::from_shape_fn(values.len(), |i| amplitude * ((omega * i as f64 + phase).sin() + jitter(rng)))
}

/// Independent uniform noise in `[-A, A]`.
pub fn random_perturbation(n: usize, amplitude: f64, rng: &mut StdRng) -> Array1<f64> {
    Array1::from_shape_fn(n, |_| amplitude * rng.random_range(-1.0..=1.0))
}

/// Phase φ of the series' component at period `lag`.
///
/// Least-squares projection of the demeaned values onto `sin(ωi)` and
/// `cos(ωi)`: with `a = Σ cᵢ·sin(ωi)` and `b = Σ cᵢ·cos(ωi)` the component is
/// proportional to `sin(ωi + φ)` for `φ = atan2(b, a)`. Returns 0 when the
/// projection vanishes. The projection runs on values divided by `max |v|`;
/// the phase does not depend on scale.
pub fn cycle_phase(values: ArrayView1<f64>, lag: usize) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    let (_, unit) = unit_scaled(values);
    let mean = unit.sum() / n as f64;
    let omega = 2.0 * PI / lag.max(MIN_CYCLE_LAG) as f64;

    let (a, b) = unit.iter().enumerate().fold((0.0, 0.0), |(a, b), (i, &v)| {
        let centered = v - mean;
        let angle = omega * i as f64;
        (a + centered * angle.sin(), b + centered * angle.cos())
    });

    b.atan2(a)
}

/// Unit jitter in `[-JITTER_SHARE, JITTER_SHARE]`.
fn jitter(rng: &mut StdRng) -> f64 {
    JITTER_SHARE * rng.random_range(-1.0..=1.0)
}
