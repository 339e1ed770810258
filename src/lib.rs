//! pssg - Plot · Salt · Smooth · Graph numeric series pipeline.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the pipeline to Python through the `_pssg` extension module. A
//! run takes a raw series, labels its shape (trend, cyclic or random), adds
//! seeded shape-aware noise ("salting"), removes noise again with the
//! adaptive Solter smoother, and renders the stages as charts.
//!
//! Key behaviors
//! -------------
//! - Numeric core: [`series`], [`classify`], [`salt`], [`smooth`].
//! - Orchestration: [`pipeline::run_pipeline`] chains the stages and returns
//!   a caller-owned [`pipeline::PipelineResult`].
//! - Edges: [`ingest`] (CSV in, processed CSV out), [`render`] (PNG charts),
//!   [`config`] (TOML settings) and the `pssg` binary.
//! - With the `python-bindings` feature, `classify`, `salt`, `smooth` and a
//!   `PipelineRun` class are registered in `_pssg`.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy lifting happens in the inner modules; the Python items in
//!   this file only convert inputs, dispatch and map errors.
//! - Every stage is a pure function of its inputs; no global state is kept,
//!   so independent runs may execute concurrently.
//!
//! Conventions
//! -----------
//! - Each subtree owns an `errors` module with a `thiserror` enum and a
//!   result alias; [`errors::PssgError`] aggregates them.
//! - Logging goes through `tracing`; installing a subscriber is left to the
//!   binary or the embedding application.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use pssg::prelude::*;
//!
//! let raw = Series::new((0..64).map(|i| (i as f64 / 3.0).sin()).collect()).unwrap();
//! let result = run_pipeline(raw, &PipelineOptions::default()).unwrap();
//! assert_eq!(result.smoothed().len(), 64);
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests sit next to the code in every module; `tests/` holds the
//!   end-to-end pipeline checks and the property-based invariants.

pub mod classify;
pub mod config;
pub mod errors;
pub mod ingest;
mod parallel;
pub mod pipeline;
pub mod render;
pub mod salt;
pub mod series;
pub mod smooth;
#[cfg(feature = "python-bindings")]
pub mod utils;

pub use crate::errors::{PssgError, PssgResult};

pub mod prelude {
    pub use crate::classify::{ClassifierThresholds, ShapeLabel, classify, classify_with};
    pub use crate::config::Config;
    pub use crate::errors::{PssgError, PssgResult};
    pub use crate::ingest::{load_csv, read_csv, save_processed, write_processed_csv};
    pub use crate::pipeline::{PipelineOptions, PipelineResult, run_pipeline};
    pub use crate::render::{RasterRenderer, RenderOptions, RenderedPlots, Renderer};
    pub use crate::salt::salt;
    pub use crate::series::{Series, SeriesStatistics, Stage, compute_statistics};
    pub use crate::smooth::{SmoothingMethod, smooth, smooth_passes, smooth_with};
}

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    pipeline::{PipelineOptions, PipelineResult, run_pipeline},
    render::{RasterRenderer, RenderOptions, Renderer},
    utils::{extract_label, extract_series},
};

/// Classify a series; returns `(label, lag)` with `lag` set for `cyclic`.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "classify")]
#[pyo3(text_signature = "(data, /)")]
fn py_classify<'py>(py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<(&'static str, Option<usize>)> {
    let series = extract_series(py, data)?;
    let label = classify::classify(&series);
    Ok((label.name(), label.lag()))
}

/// Salt a series. When `label` is omitted the data are classified first.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "salt")]
#[pyo3(
    signature = (data, intensity = 0.15, seed = 42, label = None, lag = None),
    text_signature = "(data, /, intensity=0.15, seed=42, label=None, lag=None)"
)]
fn py_salt<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, intensity: f64, seed: u64, label: Option<&str>, lag: Option<usize>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let series = extract_series(py, data)?;
    let label = match extract_label(label, lag)? {
        Some(label) => label,
        None => classify::classify(&series),
    };
    let salted = salt::salt(&series, label, intensity, seed)?;
    Ok(salted.to_vec().into_pyarray(py))
}

/// Solter-smooth a series with `passes` passes of the given radius.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "smooth")]
#[pyo3(signature = (data, radius = 2, passes = 1), text_signature = "(data, /, radius=2, passes=1)")]
fn py_smooth<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, radius: i64, passes: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let series = extract_series(py, data)?;
    let smoothed = smooth::smooth_passes(&series, radius, passes)?;
    Ok(smoothed.to_vec().into_pyarray(py))
}

/// PipelineRun - Python-facing wrapper around one pipeline run.
///
/// Purpose
/// -------
/// Run [`run_pipeline`] on Python data and expose the stages, the label and
/// the raw statistics as properties, plus chart export via `render`.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `PipelineRun(data, intensity=0.15, seed=42, radius=2, passes=3)`.
///
/// Notes
/// -----
/// - Native Rust code should call [`run_pipeline`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "pssg", frozen)]
pub struct PipelineRun {
    inner: PipelineResult,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PipelineRun {
    #[new]
    #[pyo3(
        signature = (data, intensity = 0.15, seed = 42, radius = 2, passes = 3),
        text_signature = "(data, /, intensity=0.15, seed=42, radius=2, passes=3)"
    )]
    pub fn new<'py>(
        py: Python<'py>, data: &Bound<'py, PyAny>, intensity: f64, seed: u64, radius: i64, passes: usize,
    ) -> PyResult<Self> {
        let raw = extract_series(py, data)?;
        let options = PipelineOptions { intensity, seed, radius, passes, ..PipelineOptions::default() };
        Ok(PipelineRun { inner: run_pipeline(raw, &options)? })
    }

    #[getter]
    pub fn raw<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.raw().to_vec().into_pyarray(py)
    }

    #[getter]
    pub fn salted<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.salted().to_vec().into_pyarray(py)
    }

    #[getter]
    pub fn smoothed<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.smoothed().to_vec().into_pyarray(py)
    }

    #[getter]
    pub fn label(&self) -> &'static str {
        self.inner.label().name()
    }

    #[getter]
    pub fn lag(&self) -> Option<usize> {
        self.inner.label().lag()
    }

    /// `(mean, std_dev, min, max)` of the raw series.
    #[getter]
    pub fn statistics(&self) -> (f64, f64, f64, f64) {
        let stats = self.inner.statistics();
        (stats.mean(), stats.std_dev(), stats.min(), stats.max())
    }

    /// Write the four PNG charts into `output_dir`; returns the file paths.
    #[pyo3(signature = (output_dir, width = 800, height = 600))]
    pub fn render(&self, output_dir: &str, width: u32, height: u32) -> PyResult<Vec<String>> {
        let options = RenderOptions { width, height, ..RenderOptions::default() };
        let plots = RasterRenderer::new(options)?.render(&self.inner)?;
        let written = plots.save_png(output_dir)?;
        Ok(written.iter().map(|p| p.display().to_string()).collect())
    }
}

/// _pssg - PyO3 module initializer for the Python extension.
///
/// Registers the `classify`, `salt` and `smooth` functions and the
/// `PipelineRun` class. Invoked by Python on import; never called directly.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _pssg<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_classify, m)?)?;
    m.add_function(wrap_pyfunction!(py_salt, m)?)?;
    m.add_function(wrap_pyfunction!(py_smooth, m)?)?;
    m.add_class::<PipelineRun>()?;
    Ok(())
}
