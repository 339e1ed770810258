//! pipeline::options - tunables for one pipeline run.
use crate::{
    classify::ClassifierThresholds,
    errors::PssgResult,
    salt::{DEFAULT_INTENSITY, DEFAULT_SEED, validate_intensity},
    smooth::{DEFAULT_PASSES, DEFAULT_RADIUS, SmoothingMethod, validate_passes, validate_radius},
};
use serde::{Deserialize, Serialize};

/// PipelineOptions - parameters of the salt and smooth stages.
///
/// Fields
/// ------
/// - `intensity`: salt intensity in `[0, 1]` (default 0.15).
/// - `seed`: RNG seed for salting (default 42).
/// - `radius`: smoothing window radius, ≥ 0 (default 2, a 5-point window).
/// - `passes`: smoothing passes, ≥ 1 (default 3).
/// - `method`: smoothing kernel (default Solter).
/// - `thresholds`: classifier thresholds (default 0.3 / 0.7 / 0.5).
///
/// Notes
/// -----
/// - All fields default individually when deserialized, so a TOML table
///   only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    pub intensity: f64,
    pub seed: u64,
    pub radius: i64,
    pub passes: usize,
    pub method: SmoothingMethod,
    pub thresholds: ClassifierThresholds,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            intensity: DEFAULT_INTENSITY,
            seed: DEFAULT_SEED,
            radius: DEFAULT_RADIUS as i64,
            passes: DEFAULT_PASSES,
            method: SmoothingMethod::default(),
            thresholds: ClassifierThresholds::default(),
        }
    }
}

impl PipelineOptions {
    /// Check every field against its stage's constraints.
    ///
    /// Errors
    /// ------
    /// - `PssgError::Salt` for an invalid intensity.
    /// - `PssgError::Smooth` for a negative radius, zero passes or invalid
    ///   kernel parameters.
    /// - `PssgError::Classify` for invalid thresholds.
    pub fn validate(&self) -> PssgResult<()> {
        validate_intensity(self.intensity)?;
        validate_radius(self.radius)?;
        validate_passes(self.passes)?;
        self.method.validate()?;
        self.thresholds.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PssgError;

    #[test]
    fn defaults_match_documented_values() {
        let options = PipelineOptions::default();

        assert_eq!(options.intensity, 0.15);
        assert_eq!(options.seed, 42);
        assert_eq!(options.radius, 2);
        assert_eq!(options.passes, 3);
        assert_eq!(options.method, SmoothingMethod::Solter);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn validate_reports_the_failing_stage() {
        let bad_intensity = PipelineOptions { intensity: 2.0, ..PipelineOptions::default() };
        let bad_radius = PipelineOptions { radius: -3, ..PipelineOptions::default() };
        let bad_method =
            PipelineOptions { method: SmoothingMethod::Gaussian { sigma: 0.0 }, ..PipelineOptions::default() };

        assert!(matches!(bad_intensity.validate(), Err(PssgError::Salt(_))));
        assert!(matches!(bad_radius.validate(), Err(PssgError::Smooth(_))));
        assert!(matches!(bad_method.validate(), Err(PssgError::Smooth(_))));
    }
}
