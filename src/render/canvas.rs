//! render::canvas - minimal raster line-chart canvas.
//!
//! Draws onto an `image::RgbImage`: a light-gray plot area framed by a white
//! margin, white grid lines, and series as polylines with optional square
//! markers. Data coordinates map linearly onto the plot area; the y axis
//! points up. Pixels outside the image are silently clipped. Extents and
//! the value mapping are computed on halved values, so data spanning
//! `[-f64::MAX, f64::MAX]` still maps into the plot area.
use crate::series::Series;
use image::{Rgb, RgbImage};

pub(crate) const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub(crate) const PLOT_AREA: Rgb<u8> = Rgb([229, 229, 229]);
pub(crate) const GRID: Rgb<u8> = Rgb([255, 255, 255]);

/// Grid divisions along each axis.
const GRID_DIVISIONS: u32 = 10;

/// Fraction of the value range added above and below the data.
const Y_PADDING: f64 = 0.05;

/// Drawing style of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub color: Rgb<u8>,
    pub thickness: u32,
    pub marker_size: Option<u32>,
}

/// Data extent shown by a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    /// Extent covering every series, padded vertically.
    ///
    /// A flat extent is widened by `±max(1, |v| / 2)` so the mapping stays
    /// finite.
    pub(crate) fn covering(series: &[&Series]) -> Bounds {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        let mut len = 1usize;
        for s in series {
            len = len.max(s.len());
            for (_, v) in s.iter() {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        if !lo.is_finite() || !hi.is_finite() {
            (lo, hi) = (-1.0, 1.0);
        } else if hi - lo <= f64::EPSILON * hi.abs().max(1.0) {
            let widen = (hi.abs() / 2.0).max(1.0);
            (lo, hi) = (lo - widen, hi + widen);
        }
        let pad = (hi / 2.0 - lo / 2.0) * 2.0 * Y_PADDING;
        Bounds {
            x_max: (len - 1).max(1) as f64,
            y_min: (lo - pad).max(-f64::MAX),
            y_max: (hi + pad).min(f64::MAX),
        }
    }
}

pub(crate) struct Canvas {
    image: RgbImage,
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
    bounds: Bounds,
}

impl Canvas {
    /// New canvas with background, plot area and grid drawn.
    ///
    /// Callers guarantee `2 * margin < min(width, height)`.
    pub(crate) fn new(width: u32, height: u32, margin: u32, bounds: Bounds) -> Canvas {
        let image = RgbImage::from_pixel(width, height, BACKGROUND);
        let margin = i64::from(margin);
        let mut canvas = Canvas {
            image,
            left: margin,
            top: margin,
            right: i64::from(width) - 1 - margin,
            bottom: i64::from(height) - 1 - margin,
            bounds,
        };
        canvas.fill_plot_area();
        canvas.draw_grid();
        canvas
    }

    pub(crate) fn draw_series(&mut self, series: &Series, style: &SeriesStyle) {
        let points: Vec<(i64, i64)> = series.iter().map(|(i, v)| self.to_pixel(i as f64, v)).collect();

        if points.len() == 1 {
            self.square(points[0], style.thickness.max(1), style.color);
        }
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], style.thickness, style.color);
        }
        if let Some(size) = style.marker_size {
            for &p in &points {
                self.square(p, size, style.color);
            }
        }
    }

    pub(crate) fn into_image(self) -> RgbImage {
        self.image
    }

    fn to_pixel(&self, x: f64, y: f64) -> (i64, i64) {
        let Bounds { x_max, y_min, y_max } = self.bounds;
        let w = (self.right - self.left) as f64;
        let h = (self.bottom - self.top) as f64;
        let px = self.left as f64 + x / x_max * w;
        let py = self.bottom as f64 - (y / 2.0 - y_min / 2.0) / (y_max / 2.0 - y_min / 2.0) * h;
        (px.round() as i64, py.round() as i64)
    }

    fn fill_plot_area(&mut self) {
        for y in self.top..=self.bottom {
            for x in self.left..=self.right {
                self.put(x, y, PLOT_AREA);
            }
        }
    }

    fn draw_grid(&mut self) {
        let divisions = i64::from(GRID_DIVISIONS);
        for k in 1..divisions {
            let x = self.left + (self.right - self.left) * k / divisions;
            let y = self.top + (self.bottom - self.top) * k / divisions;
            self.line((x, self.top), (x, self.bottom), 1, GRID);
            self.line((self.left, y), (self.right, y), 1, GRID);
        }
    }

    /// Bresenham line stamped with a square brush of side `thickness`.
    fn line(&mut self, from: (i64, i64), to: (i64, i64), thickness: u32, color: Rgb<u8>) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.square((x, y), thickness.max(1), color);
            if (x, y) == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn square(&mut self, center: (i64, i64), size: u32, color: Rgb<u8>) {
        let size = i64::from(size);
        let lo = -(size - 1) / 2;
        let hi = size / 2;
        for dy in lo..=hi {
            for dx in lo..=hi {
                self.put(center.0 + dx, center.1 + dy, color);
            }
        }
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x < 0 || y < 0 || x >= i64::from(self.image.width()) || y >= i64::from(self.image.height()) {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE: SeriesStyle = SeriesStyle { color: Rgb([255, 0, 0]), thickness: 1, marker_size: None };

    fn series(values: Vec<f64>) -> Series {
        Series::new(values).unwrap()
    }

    #[test]
    fn bounds_widen_flat_extent() {
        let flat = series(vec![2.0, 2.0, 2.0]);

        let bounds = Bounds::covering(&[&flat]);

        assert!(bounds.y_min < 1.0 && bounds.y_max > 3.0);
        assert_eq!(bounds.x_max, 2.0);
    }

    #[test]
    fn new_canvas_has_margin_plot_area_and_grid() {
        let canvas = Canvas::new(100, 80, 10, Bounds::covering(&[&series(vec![0.0, 1.0])]));
        let image = canvas.into_image();

        assert_eq!(image.dimensions(), (100, 80));
        assert_eq!(*image.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*image.get_pixel(11, 11), PLOT_AREA);
        // first vertical grid line: 10 + 79 * 1 / 10 = 17
        assert_eq!(*image.get_pixel(17, 40), GRID);
    }

    #[test]
    // Purpose
    // -------
    // A rising series is drawn from the bottom-left to the top-right corner
    // of the plot area (inside the vertical padding).
    fn rising_series_spans_plot_area() {
        let data = series(vec![0.0, 1.0]);
        let mut canvas = Canvas::new(50, 50, 5, Bounds::covering(&[&data]));

        canvas.draw_series(&data, &STYLE);
        let image = canvas.into_image();

        let red: Vec<(u32, u32)> =
            image.enumerate_pixels().filter(|(_, _, p)| **p == STYLE.color).map(|(x, y, _)| (x, y)).collect();
        assert!(red.contains(&(5, 42)));
        assert!(red.contains(&(44, 7)));
    }

    #[test]
    fn extreme_values_map_inside_plot_area() {
        let m = f64::MAX;
        let data = series(vec![m, -m, m, 0.0]);
        let bounds = Bounds::covering(&[&data]);
        let canvas = Canvas::new(60, 60, 6, bounds);

        assert!(bounds.y_min.is_finite() && bounds.y_max.is_finite());
        for (i, v) in data.iter() {
            let (x, y) = canvas.to_pixel(i as f64, v);
            assert!((6..=53).contains(&x) && (6..=53).contains(&y), "({x}, {y})");
        }

        let flat = Bounds::covering(&[&series(vec![m, m])]);
        assert!(flat.y_min.is_finite() && flat.y_min < flat.y_max);
    }

    #[test]
    fn single_point_series_is_visible() {
        let data = series(vec![3.0]);
        let mut canvas = Canvas::new(40, 40, 4, Bounds::covering(&[&data]));

        canvas.draw_series(&data, &STYLE);

        assert!(canvas.into_image().pixels().any(|p| *p == STYLE.color));
    }
}
