//! render - raster charts of pipeline results.
//!
//! Purpose
//! -------
//! Visualize the three stages of a [`PipelineResult`](crate::pipeline::PipelineResult)
//! as PNG line charts. Rendering is a trait object called in-process, so
//! alternative backends plug in behind [`Renderer`].
//!
//! Key behaviors
//! -------------
//! - [`RasterRenderer`] draws with the `image` crate at a default 800×600.
//! - [`RenderedPlots::save_png`] writes the four chart files into a
//!   directory.
//! - Degenerate canvas geometry is rejected as
//!   [`RenderError::InvalidDimensions`].

pub mod canvas;
pub mod errors;
pub mod plots;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::canvas::SeriesStyle;
pub use self::errors::{RenderError, RenderResult};
pub use self::plots::{
    FINAL_PLOT, INITIAL_PLOT, RasterRenderer, RenderOptions, RenderedPlots, Renderer, SALTED_PLOT, SMOOTHED_PLOT,
    stage_style,
};
