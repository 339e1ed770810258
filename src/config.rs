//! config - TOML configuration for pipeline runs and rendering.
//!
//! Purpose
//! -------
//! Load the tunables of a PSSG run from a TOML file so the CLI and scripted
//! callers share one format:
//!
//! ```toml
//! [pipeline]
//! intensity = 0.2
//! seed = 7
//! radius = 3
//! passes = 2
//! method = { method = "gaussian", sigma = 1.5 }
//!
//! [pipeline.thresholds]
//! cyclic = 0.6
//!
//! [render]
//! width = 1024
//! height = 768
//! ```
//!
//! Key behaviors
//! -------------
//! - Every table and key is optional; omitted values take their defaults.
//! - [`Config::from_toml_str`] and [`Config::load`] parse and then
//!   [`Config::validate`], so a returned `Config` is always usable.
use crate::{
    errors::{PssgError, PssgResult},
    pipeline::PipelineOptions,
    render::RenderOptions,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// ConfigError - configuration that cannot be read or parsed.
///
/// Semantic checks of individual values are reported through the stage
/// errors (`SaltError`, `SmoothError`, …) wrapped in
/// [`PssgError`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Config - full configuration of a PSSG run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pipeline: PipelineOptions,
    pub render: RenderOptions,
}

impl Config {
    /// Parse and validate a TOML document.
    ///
    /// Errors
    /// ------
    /// - `PssgError::Config` for malformed TOML or unknown value types.
    /// - Stage errors (`PssgError::Salt`, `PssgError::Smooth`, …) for values
    ///   outside their valid range.
    pub fn from_toml_str(text: &str) -> PssgResult<Self> {
        let config: Config = toml::from_str(text).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> PssgResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| PssgError::Config(ConfigError::Read { path: path.to_path_buf(), source }))?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> PssgResult<()> {
        self.pipeline.validate()?;
        self.render.validate()?;
        Ok(())
    }
}
