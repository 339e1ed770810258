//! pipeline::run - classify → salt → smooth orchestration.
use crate::{
    classify::classify_statistics,
    errors::PssgResult,
    pipeline::{options::PipelineOptions, result::PipelineResult},
    salt::salt_with_statistics,
    series::{Series, compute_statistics},
    smooth::smooth_with,
};
use tracing::{info, info_span};

/// Run the full pipeline on a raw series.
///
/// Parameters
/// ----------
/// - `raw`: `Series`
///   Input series; ownership moves into the result.
/// - `options`: `&PipelineOptions`
///   Stage parameters; validated before any work is done.
///
/// Returns
/// -------
/// `PssgResult<PipelineResult>`
///   Raw, salted and smoothed series with the raw statistics, the assigned
///   label and a copy of `options`.
///
/// Errors
/// ------
/// - Any error of [`PipelineOptions::validate`].
///
/// Notes
/// -----
/// - Smoothing is applied to the salted series, not the raw one.
/// - The run is wrapped in an `info_span!("pssg_pipeline")`; stage decisions
///   are logged as `info!` events inside it.
///
/// Examples
/// --------
/// ```rust
/// # use pssg::pipeline::{PipelineOptions, run_pipeline};
/// # use pssg::series::Series;
/// let raw = Series::new((0..40).map(|i| i as f64).collect()).unwrap();
/// let result = run_pipeline(raw, &PipelineOptions::default()).unwrap();
/// assert_eq!(result.salted().len(), 40);
/// assert_eq!(result.smoothed().len(), 40);
/// ```
pub fn run_pipeline(raw: Series, options: &PipelineOptions) -> PssgResult<PipelineResult> {
    options.validate()?;

    let span = info_span!("pssg_pipeline", len = raw.len(), seed = options.seed);
    let _guard = span.enter();

    let statistics = compute_statistics(&raw);
    let label = classify_statistics(&statistics, &options.thresholds);
    info!(
        %label,
        mean = statistics.mean(),
        std_dev = statistics.std_dev(),
        trend_strength = statistics.trend_strength(),
        "classified series"
    );

    let salted = salt_with_statistics(&raw, &statistics, label, options.intensity, options.seed)?;
    let smoothed = smooth_with(&salted, options.radius, options.passes, &options.method)?;
    info!(
        method = %options.method,
        radius = options.radius,
        passes = options.passes,
        "salted and smoothed series"
    );

    Ok(PipelineResult::new(raw, salted, smoothed, statistics, label, options.clone()))
}
