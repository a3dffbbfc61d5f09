//! Render pipeline: layout, rasterize, downsample.

use image::imageops::FilterType;
use image::RgbImage;
use tracing::debug;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::{RenderError, RenderResult};
use crate::layout::compute_layout;

/// Everything that determines one output image. Requests share no state;
/// rendering the same request twice yields pixel-identical output.
#[derive(Debug, Clone)]
pub struct RenderRequest<'a> {
    pub target_width: u32,
    pub target_height: u32,
    /// Bar colors, drawn left to right.
    pub colors: &'a [Rgb],
    pub background: Rgb,
    /// Supersampling factor; 1 disables anti-aliasing entirely.
    pub supersample: u32,
}

/// Render one wallpaper at target resolution.
///
/// Draws hard-edged pills on a canvas `supersample` times larger than the
/// target, then downsamples with Lanczos3. That resampling pass is the only
/// anti-aliasing in the pipeline; with `supersample == 1` the canvas is
/// returned as-is.
pub fn render(request: &RenderRequest) -> RenderResult<RgbImage> {
    let geometry = compute_layout(
        request.target_width,
        request.target_height,
        request.colors.len(),
        request.supersample,
    );
    debug!(
        render_width = geometry.render_width,
        render_height = geometry.render_height,
        scale = geometry.scale,
        bars = request.colors.len(),
        "computed layout"
    );

    // Render dimensions that do not fit u32 cannot back a real canvas;
    // treat them as the oversized-allocation case so the batch keeps going.
    let (render_width, render_height) = match (
        u32::try_from(geometry.render_width),
        u32::try_from(geometry.render_height),
    ) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(RenderError::OutOfMemory {
                width: geometry.render_width,
                height: geometry.render_height,
                bytes: geometry.render_width as u128 * geometry.render_height as u128 * 3,
            })
        }
    };

    let mut canvas = Canvas::filled(render_width, render_height, request.background)?;

    for (i, &color) in request.colors.iter().enumerate() {
        let x = geometry.bar_x(i);
        canvas.fill_rounded_rect(
            x,
            geometry.start_y,
            x + geometry.bar_width,
            geometry.start_y + geometry.bar_height,
            geometry.corner_radius,
            color,
        );
    }

    let supersampled = RgbImage::from_raw(render_width, render_height, canvas.into_pixels())
        .ok_or_else(|| RenderError::EncodeError("canvas buffer size mismatch".to_string()))?;

    if request.supersample <= 1 {
        return Ok(supersampled);
    }

    Ok(image::imageops::resize(
        &supersampled,
        request.target_width,
        request.target_height,
        FilterType::Lanczos3,
    ))
}
