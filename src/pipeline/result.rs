//! pipeline::result - caller-owned output of a pipeline run.
use crate::{
    classify::ShapeLabel,
    pipeline::options::PipelineOptions,
    series::{Series, SeriesStatistics, Stage, compute_statistics},
};

/// PipelineResult - the three stages of one run plus its provenance.
///
/// Fields
/// ------
/// - `raw`, `salted`, `smoothed`: the stage series, all of equal length.
/// - `statistics`: statistics of the raw series used for classification and
///   salting.
/// - `label`: shape assigned to the raw series.
/// - `options`: the options the run actually used.
///
/// Notes
/// -----
/// - Immutable once built. No state is kept anywhere else; dropping the
///   result releases the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResult {
    raw: Series,
    salted: Series,
    smoothed: Series,
    statistics: SeriesStatistics,
    label: ShapeLabel,
    options: PipelineOptions,
}

impl PipelineResult {
    pub(crate) fn new(
        raw: Series, salted: Series, smoothed: Series, statistics: SeriesStatistics, label: ShapeLabel,
        options: PipelineOptions,
    ) -> Self {
        PipelineResult { raw, salted, smoothed, statistics, label, options }
    }

    pub fn raw(&self) -> &Series {
        &self.raw
    }

    pub fn salted(&self) -> &Series {
        &self.salted
    }

    pub fn smoothed(&self) -> &Series {
        &self.smoothed
    }

    /// Series of the requested stage.
    pub fn stage(&self, stage: Stage) -> &Series {
        match stage {
            Stage::Raw => &self.raw,
            Stage::Salted => &self.salted,
            Stage::Smoothed => &self.smoothed,
        }
    }

    pub fn statistics(&self) -> &SeriesStatistics {
        &self.statistics
    }

    pub fn label(&self) -> ShapeLabel {
        self.label
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Ratio `std(smoothed) / std(salted)`; below 1 when smoothing removed
    /// variability. `None` when the salted series is constant.
    pub fn smoothing_ratio(&self) -> Option<f64> {
        let salted = compute_statistics(&self.salted).std_dev();
        if salted > 0.0 {
            Some(compute_statistics(&self.smoothed).std_dev() / salted)
        } else {
            None
        }
    }

    /// Consume the result, returning `(raw, salted, smoothed)`.
    pub fn into_series(self) -> (Series, Series, Series) {
        (self.raw, self.salted, self.smoothed)
    }
}
