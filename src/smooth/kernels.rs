//! smooth::kernels - selectable smoothing methods.
//!
//! Besides the adaptive Solter kernel the smoother offers four classical
//! alternatives, chosen through [`SmoothingMethod`] and applied with
//! [`smooth_with`]:
//!
//! - `MovingAverage`: unweighted mean over the window.
//! - `Exponential { alpha }`: recursive `s[i] = α·v[i] + (1-α)·s[i-1]`,
//!   seeded with `s[0] = v[0]`. The radius is not used.
//! - `Gaussian { sigma }`: weights `exp(-d² / 2σ²)`.
//! - `Bilateral { spatial_sigma, value_sigma }`: Gaussian in index distance
//!   times Gaussian in value difference, which keeps sharp level shifts.
//!
//! Window-based methods share the Solter edge policy: windows are truncated
//! at the boundaries and weights renormalize.
use crate::{
    parallel::map_range,
    series::{Series, Stage},
    smooth::{
        errors::SmoothResult,
        solter::{convex_mean, solter_pass, window_bounds},
        validation::{validate_passes, validate_positive, validate_radius, validate_unit_open},
    },
};
use ndarray::{Array1, ArrayView1, s};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smoothing kernel selection.
///
/// Serialized with an internal `method` tag, e.g.
/// `{ method = "gaussian", sigma = 1.5 }` in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum SmoothingMethod {
    #[default]
    Solter,
    MovingAverage,
    Exponential { alpha: f64 },
    Gaussian { sigma: f64 },
    Bilateral { spatial_sigma: f64, value_sigma: f64 },
}

impl SmoothingMethod {
    pub const fn name(&self) -> &'static str {
        match self {
            SmoothingMethod::Solter => "solter",
            SmoothingMethod::MovingAverage => "moving_average",
            SmoothingMethod::Exponential { .. } => "exponential",
            SmoothingMethod::Gaussian { .. } => "gaussian",
            SmoothingMethod::Bilateral { .. } => "bilateral",
        }
    }

    /// Check the kernel parameters.
    ///
    /// Errors
    /// ------
    /// - `SmoothError::InvalidParameter` when `alpha ∉ (0, 1)` or a sigma is
    ///   not finite and positive.
    pub fn validate(&self) -> SmoothResult<()> {
        match *self {
            SmoothingMethod::Solter | SmoothingMethod::MovingAverage => Ok(()),
            SmoothingMethod::Exponential { alpha } => validate_unit_open("alpha", alpha),
            SmoothingMethod::Gaussian { sigma } => validate_positive("sigma", sigma),
            SmoothingMethod::Bilateral { spatial_sigma, value_sigma } => {
                validate_positive("spatial_sigma", spatial_sigma)?;
                validate_positive("value_sigma", value_sigma)
            }
        }
    }

    fn apply(&self, values: ArrayView1<f64>, radius: usize) -> Array1<f64> {
        match *self {
            SmoothingMethod::Solter => solter_pass(values, radius),
            SmoothingMethod::MovingAverage => window_average(values, radius, |_, _| 1.0),
            SmoothingMethod::Exponential { alpha } => exponential_pass(values, alpha),
            SmoothingMethod::Gaussian { sigma } => {
                let denom = 2.0 * sigma * sigma;
                window_average(values, radius, |distance, _| (-(distance * distance) / denom).exp())
            }
            SmoothingMethod::Bilateral { spatial_sigma, value_sigma } => {
                let spatial = 2.0 * spatial_sigma * spatial_sigma;
                let range = 2.0 * value_sigma * value_sigma;
                window_average(values, radius, |distance, delta| {
                    (-(distance * distance) / spatial - (delta * delta) / range).exp()
                })
            }
        }
    }
}

impl fmt::Display for SmoothingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Smooth with any [`SmoothingMethod`], repeated `passes` times.
///
/// Errors
/// ------
/// - `SmoothError::InvalidRadius` when `radius < 0`.
/// - `SmoothError::InvalidPasses` when `passes == 0`.
/// - `SmoothError::InvalidParameter` from [`SmoothingMethod::validate`].
///
/// Examples
/// --------
/// ```rust
/// # use pssg::series::Series;
/// # use pssg::smooth::{SmoothingMethod, smooth_with};
/// let series = Series::new(vec![0.0, 3.0, 0.0, 3.0, 0.0]).unwrap();
/// let smoothed = smooth_with(&series, 1, 1, &SmoothingMethod::MovingAverage).unwrap();
/// assert_eq!(smoothed.value_at(2), Some(2.0));
/// ```
pub fn smooth_with(series: &Series, radius: i64, passes: usize, method: &SmoothingMethod) -> SmoothResult<Series> {
    let radius = validate_radius(radius)?;
    validate_passes(passes)?;
    method.validate()?;

    let mut values = method.apply(series.values(), radius);
    for _ in 1..passes {
        values = method.apply(values.view(), radius);
    }
    Ok(series.derive(values, Stage::Smoothed)?)
}

/// Weighted window average with a caller-supplied weight
/// `weight(index_distance, value_difference)`.
fn window_average<W>(values: ArrayView1<f64>, radius: usize, weight: W) -> Array1<f64>
where
    W: Fn(f64, f64) -> f64 + Sync + Send,
{
    let n = values.len();
    if radius == 0 || n < 2 {
        return values.to_owned();
    }

    let smoothed = map_range(0..n, |i| {
        let (lo, hi) = window_bounds(i, radius, n);
        let center = values[i];
        let window = values.slice(s![lo..=hi]);
        let weights: Vec<f64> =
            window.iter().enumerate().map(|(k, &v)| weight((lo + k).abs_diff(i) as f64, v - center)).collect();
        if weights.iter().sum::<f64>() > 0.0 { convex_mean(window, &weights) } else { center }
    });
    Array1::from(smoothed)
}

fn exponential_pass(values: ArrayView1<f64>, alpha: f64) -> Array1<f64> {
    let mut out = Array1::zeros(values.len());
    let mut state = match values.first() {
        Some(&first) => first,
        None => return out,
    };
    for (slot, &v) in out.iter_mut().zip(values.iter()) {
        state = (alpha * v + (1.0 - alpha) * state).clamp(v.min(state), v.max(state));
        *slot = state;
    }
    out
}
