//! render::plots - the four PSSG charts.
//!
//! Purpose
//! -------
//! Turn a [`PipelineResult`] into four raster line charts: the raw series,
//! the salted series, the smoothed series and an overlay of all three.
//!
//! Key behaviors
//! -------------
//! - [`Renderer`] is the seam between the pipeline and any drawing backend;
//!   [`RasterRenderer`] is the in-process `image` implementation.
//! - Stage styles: raw in blue with markers, salted in green with markers,
//!   smoothed in red with a thick line. The overlay reuses the same styles
//!   on a shared value scale.
//! - [`RenderedPlots::save_png`] writes `initial_plot.png`,
//!   `salted_plot.png`, `smoothed_plot.png` and `final_plot.png`.
//!
//! Conventions
//! -----------
//! - Charts carry no text; axis labels and titles are left to viewers.
use crate::{
    pipeline::PipelineResult,
    render::{
        canvas::{Bounds, Canvas, SeriesStyle},
        errors::{RenderError, RenderResult},
    },
    series::{Series, Stage},
};
use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_MARGIN: u32 = 40;

pub const INITIAL_PLOT: &str = "initial_plot.png";
pub const SALTED_PLOT: &str = "salted_plot.png";
pub const SMOOTHED_PLOT: &str = "smoothed_plot.png";
pub const FINAL_PLOT: &str = "final_plot.png";

/// Canvas geometry of every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT, margin: DEFAULT_MARGIN }
    }
}

impl RenderOptions {
    /// Errors
    /// ------
    /// - `RenderError::InvalidDimensions` unless the margins leave at least a
    ///   2×2 plot area.
    pub fn validate(&self) -> RenderResult<()> {
        let inner = |side: u32| side.saturating_sub(self.margin.saturating_mul(2));
        if inner(self.width) < 2 || inner(self.height) < 2 {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
                margin: self.margin,
            });
        }
        Ok(())
    }
}

/// Line style used for each stage.
pub fn stage_style(stage: Stage) -> SeriesStyle {
    match stage {
        Stage::Raw => SeriesStyle { color: Rgb([31, 78, 200]), thickness: 1, marker_size: Some(5) },
        Stage::Salted => SeriesStyle { color: Rgb([30, 150, 60]), thickness: 1, marker_size: Some(5) },
        Stage::Smoothed => SeriesStyle { color: Rgb([210, 35, 35]), thickness: 3, marker_size: None },
    }
}

/// Drawing backend for pipeline results.
pub trait Renderer {
    fn render(&self, result: &PipelineResult) -> RenderResult<RenderedPlots>;
}

/// The four charts of one run.
#[derive(Debug, Clone)]
pub struct RenderedPlots {
    pub initial: RgbImage,
    pub salted: RgbImage,
    pub smoothed: RgbImage,
    pub overlay: RgbImage,
}

impl RenderedPlots {
    /// `(file name, image)` pairs in output order.
    pub fn named(&self) -> [(&'static str, &RgbImage); 4] {
        [
            (INITIAL_PLOT, &self.initial),
            (SALTED_PLOT, &self.salted),
            (SMOOTHED_PLOT, &self.smoothed),
            (FINAL_PLOT, &self.overlay),
        ]
    }

    /// Write all charts as PNG files into `dir`, creating it if needed.
    ///
    /// Returns
    /// -------
    /// The written paths, in the order of [`RenderedPlots::named`].
    ///
    /// Errors
    /// ------
    /// - `RenderError::Io` when the directory cannot be created.
    /// - `RenderError::Image` when encoding or writing a file fails.
    pub fn save_png(&self, dir: impl AsRef<Path>) -> RenderResult<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(4);
        for (name, image) in self.named() {
            let path = dir.join(name);
            image.save(&path)?;
            debug!(path = %path.display(), "wrote chart");
            written.push(path);
        }
        Ok(written)
    }
}

/// In-process raster renderer built on the `image` crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RasterRenderer {
    options: RenderOptions,
}

impl RasterRenderer {
    /// Errors
    /// ------
    /// - `RenderError::InvalidDimensions` from [`RenderOptions::validate`].
    pub fn new(options: RenderOptions) -> RenderResult<Self> {
        options.validate()?;
        Ok(RasterRenderer { options })
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    fn chart(&self, series: &[&Series]) -> RgbImage {
        let RenderOptions { width, height, margin } = self.options;
        let mut canvas = Canvas::new(width, height, margin, Bounds::covering(series));
        for s in series {
            canvas.draw_series(s, &stage_style(s.stage()));
        }
        canvas.into_image()
    }
}

impl Renderer for RasterRenderer {
    fn render(&self, result: &PipelineResult) -> RenderResult<RenderedPlots> {
        let (raw, salted, smoothed) = (result.raw(), result.salted(), result.smoothed());
        Ok(RenderedPlots {
            initial: self.chart(&[raw]),
            salted: self.chart(&[salted]),
            smoothed: self.chart(&[smoothed]),
            overlay: self.chart(&[raw, salted, smoothed]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{PipelineOptions, run_pipeline};
    use std::f64::consts::PI;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Option validation for degenerate canvases.
    // - Dimensions and stage colours of rendered charts.
    // - PNG export file names.
    // -------------------------------------------------------------------------

    fn result() -> PipelineResult {
        let raw = Series::new((0..48).map(|i| (2.0 * PI * i as f64 / 12.0).sin()).collect()).unwrap();
        run_pipeline(raw, &PipelineOptions::default()).unwrap()
    }

    fn contains_color(image: &RgbImage, color: Rgb<u8>) -> bool {
        image.pixels().any(|p| *p == color)
    }

    #[test]
    fn options_reject_degenerate_canvas() {
        for options in [
            RenderOptions { width: 0, ..RenderOptions::default() },
            RenderOptions { width: 80, height: 80, margin: 40 },
        ] {
            assert!(matches!(RasterRenderer::new(options), Err(RenderError::InvalidDimensions { .. })));
        }
    }

    #[test]
    // Purpose
    // -------
    // Each chart has the configured size and carries only its own stage
    // colour; the overlay carries all three.
    fn charts_use_stage_colours() {
        let renderer = RasterRenderer::new(RenderOptions { width: 320, height: 240, margin: 16 }).unwrap();

        let plots = renderer.render(&result()).unwrap();

        let raw = stage_style(Stage::Raw).color;
        let salted = stage_style(Stage::Salted).color;
        let smoothed = stage_style(Stage::Smoothed).color;
        for (_, image) in plots.named() {
            assert_eq!(image.dimensions(), (320, 240));
        }
        assert!(contains_color(&plots.initial, raw) && !contains_color(&plots.initial, smoothed));
        assert!(contains_color(&plots.salted, salted) && !contains_color(&plots.salted, raw));
        assert!(contains_color(&plots.smoothed, smoothed) && !contains_color(&plots.smoothed, salted));
        assert!([raw, salted, smoothed].into_iter().all(|c| contains_color(&plots.overlay, c)));
    }

    #[test]
    fn default_renderer_is_800_by_600() {
        let plots = RasterRenderer::default().render(&result()).unwrap();

        assert_eq!(plots.overlay.dimensions(), (800, 600));
    }

    #[test]
    fn save_png_writes_four_files() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = RasterRenderer::new(RenderOptions { width: 120, height: 90, margin: 8 }).unwrap();
        let plots = renderer.render(&result()).unwrap();

        let written = plots.save_png(dir.path().join("charts")).unwrap();

        let names: Vec<_> = written.iter().filter_map(|p| p.file_name()?.to_str()).collect();
        assert_eq!(names, vec![INITIAL_PLOT, SALTED_PLOT, SMOOTHED_PLOT, FINAL_PLOT]);
        for path in &written {
            let decoded = image::open(path).unwrap();
            assert_eq!((decoded.width(), decoded.height()), (120, 90));
        }
    }
}
