//! RGB raster canvas with rounded-rectangle fill.
//!
//! No per-pixel anti-aliasing happens here: shapes are hard-edged at canvas
//! resolution, and the render pipeline supersamples then downsamples to get
//! smooth edges.

use crate::color::Rgb;
use crate::error::{RenderError, RenderResult};

/// An owned RGB pixel buffer (3 bytes per pixel, row-major).
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Allocate a canvas filled with `background`.
    ///
    /// Allocation is fallible: a supersampled wallpaper canvas can run to
    /// gigabytes, and an allocation failure must surface as a per-image
    /// error, not abort the process.
    pub fn filled(width: u32, height: u32, background: Rgb) -> RenderResult<Self> {
        let bytes = width as usize * height as usize * 3;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(bytes)
            .map_err(|_| RenderError::OutOfMemory {
                width: width as u64,
                height: height as u64,
                bytes: bytes as u128,
            })?;

        for _ in 0..width as usize * height as usize {
            pixels.extend_from_slice(&[background.r, background.g, background.b]);
        }

        Ok(Canvas {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Consume the canvas, returning the raw RGB bytes.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Color of the pixel at (x, y). Test/inspection helper.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Rgb::new(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }

    /// Fill a rounded rectangle spanning x in [x0, x1), y in [y0, y1) with
    /// corner radius `radius`, in continuous canvas coordinates.
    ///
    /// A pixel is filled when its center lies inside the shape. With
    /// radius == (x1 - x0) / 2 the shape is a pill: straight sides with
    /// semicircular caps.
    pub fn fill_rounded_rect(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        radius: f64,
        color: Rgb,
    ) {
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let radius = radius.min((x1 - x0) / 2.0).min((y1 - y0) / 2.0).max(0.0);

        let top_cap_cy = y0 + radius;
        let bottom_cap_cy = y1 - radius;

        let row_first = pixel_range_start(y0);
        let row_last = pixel_range_end(y1, self.height);

        for iy in row_first..row_last {
            let cy = iy as f64 + 0.5;

            // Rows inside a cap are inset by the circle equation; the
            // straight-sided middle has no inset.
            let dy = if cy < top_cap_cy {
                top_cap_cy - cy
            } else if cy > bottom_cap_cy {
                cy - bottom_cap_cy
            } else {
                0.0
            };
            let inset = radius - (radius * radius - dy * dy).max(0.0).sqrt();

            self.fill_span(iy, x0 + inset, x1 - inset, color);
        }
    }

    /// Fill pixels on row `iy` whose centers lie in [x_start, x_end).
    fn fill_span(&mut self, iy: u32, x_start: f64, x_end: f64, color: Rgb) {
        let first = pixel_range_start(x_start);
        let last = pixel_range_end(x_end, self.width);

        let row = iy as usize * self.width as usize * 3;
        for ix in first..last {
            let idx = row + ix as usize * 3;
            self.pixels[idx] = color.r;
            self.pixels[idx + 1] = color.g;
            self.pixels[idx + 2] = color.b;
        }
    }
}

/// First pixel index whose center (i + 0.5) is >= `coord`, clamped to 0.
fn pixel_range_start(coord: f64) -> u32 {
    let first = (coord - 0.5).ceil();
    if first < 0.0 {
        0
    } else {
        first as u32
    }
}

/// One past the last pixel index whose center is < `coord`, clamped to `limit`.
fn pixel_range_end(coord: f64, limit: u32) -> u32 {
    let end = (coord - 0.5).ceil();
    if end < 0.0 {
        0
    } else {
        (end as u64).min(limit as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_background() {
        let bg = Rgb::new(0xFD, 0xF6, 0xE3);
        let canvas = Canvas::filled(4, 3, bg).unwrap();
        assert_eq!(canvas.pixels().len(), 4 * 3 * 3);
        assert_eq!(canvas.pixel(0, 0), bg);
        assert_eq!(canvas.pixel(3, 2), bg);
    }

    #[test]
    fn test_fill_plain_rect() {
        // Radius 0 degenerates to an axis-aligned rectangle.
        let bg = Rgb::new(0, 0, 0);
        let red = Rgb::new(255, 0, 0);
        let mut canvas = Canvas::filled(10, 10, bg).unwrap();
        canvas.fill_rounded_rect(2.0, 3.0, 8.0, 7.0, 0.0, red);

        assert_eq!(canvas.pixel(2, 3), red);
        assert_eq!(canvas.pixel(7, 6), red);
        assert_eq!(canvas.pixel(1, 3), bg);
        assert_eq!(canvas.pixel(8, 6), bg);
        assert_eq!(canvas.pixel(2, 2), bg);
        assert_eq!(canvas.pixel(2, 7), bg);
    }

    #[test]
    fn test_pill_corners_are_rounded() {
        // A 10-wide pill: radius 5, cap circle centers at y0+5 / y1-5.
        let bg = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        let mut canvas = Canvas::filled(20, 40, bg).unwrap();
        canvas.fill_rounded_rect(5.0, 5.0, 15.0, 35.0, 5.0, white);

        // Corner pixels are outside the cap circles.
        assert_eq!(canvas.pixel(5, 5), bg);
        assert_eq!(canvas.pixel(14, 5), bg);
        assert_eq!(canvas.pixel(5, 34), bg);
        assert_eq!(canvas.pixel(14, 34), bg);
        // Cap apex and mid-body are inside.
        assert_eq!(canvas.pixel(9, 5), white);
        assert_eq!(canvas.pixel(10, 5), white);
        assert_eq!(canvas.pixel(5, 20), white);
        assert_eq!(canvas.pixel(14, 20), white);
    }

    #[test]
    fn test_fill_clips_to_canvas() {
        let bg = Rgb::new(0, 0, 0);
        let red = Rgb::new(255, 0, 0);
        let mut canvas = Canvas::filled(8, 8, bg).unwrap();
        // Partially off-canvas on all sides; must not panic.
        canvas.fill_rounded_rect(-4.0, -4.0, 12.0, 12.0, 2.0, red);
        assert_eq!(canvas.pixel(4, 4), red);
    }
}
