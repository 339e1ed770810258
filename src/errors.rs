//! errors - crate-level error aggregate.
//!
//! Purpose
//! -------
//! Give orchestration code (the pipeline, configuration loading, the CLI and
//! the Python bridge) one error type that wraps every subtree error, so `?`
//! works across stage boundaries.
//!
//! Conventions
//! -----------
//! - Each subtree keeps its own narrow error enum (`SeriesError`,
//!   `SaltError`, …) for its public functions; only cross-cutting entry
//!   points return [`PssgResult`].
//! - `Display` of a wrapped error is the inner message unchanged, prefixed
//!   with the stage name.
use crate::{
    classify::ClassifyError, config::ConfigError, ingest::IngestError, render::RenderError, salt::SaltError,
    series::SeriesError, smooth::SmoothError,
};

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type PssgResult<T> = Result<T, PssgError>;

/// PssgError - any failure raised by the PSSG crate.
#[derive(Debug, thiserror::Error)]
pub enum PssgError {
    #[error("series: {0}")]
    Series(#[from] SeriesError),

    #[error("classify: {0}")]
    Classify(#[from] ClassifyError),

    #[error("salt: {0}")]
    Salt(#[from] SaltError),

    #[error("smooth: {0}")]
    Smooth(#[from] SmoothError),

    #[error("ingest: {0}")]
    Ingest(#[from] IngestError),

    #[error("render: {0}")]
    Render(#[from] RenderError),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "python-bindings")]
impl From<PssgError> for PyErr {
    fn from(err: PssgError) -> PyErr {
        PyValueError::new_err(format!("PssgError: {err}"))
    }
}
