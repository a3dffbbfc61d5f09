//! Layout engine: bar geometry from reference proportions.
//!
//! All bar dimensions are defined against a fixed 800x400 design canvas and
//! scaled uniformly to the render resolution, so the composition looks the
//! same at any target size or aspect ratio.

/// Reference design canvas width.
pub const REF_WIDTH: f64 = 800.0;
/// Reference design canvas height.
pub const REF_HEIGHT: f64 = 400.0;
/// Bar width on the reference canvas.
pub const BASE_BAR_WIDTH: f64 = 70.0;
/// Bar height on the reference canvas.
pub const BASE_BAR_HEIGHT: f64 = 280.0;
/// Center-to-center distance between consecutive bars on the reference canvas.
pub const BASE_SPACING: f64 = 42.0;

/// Geometry for one render: where the bars go on the supersampled canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Canvas width at render (supersampled) resolution. Held as u64 so the
    /// supersample multiply cannot overflow; the renderer rejects anything
    /// that does not fit a real canvas.
    pub render_width: u64,
    /// Canvas height at render (supersampled) resolution.
    pub render_height: u64,
    /// Uniform scale from reference space to render space.
    pub scale: f64,
    pub bar_width: f64,
    pub bar_height: f64,
    /// Left-edge-to-left-edge distance between consecutive bars.
    pub spacing: f64,
    /// Half the bar width: bars are true pills.
    pub corner_radius: f64,
    /// Left edge of the first bar.
    pub start_x: f64,
    /// Top edge of every bar.
    pub start_y: f64,
}

impl Geometry {
    /// Left edge of bar `i` (0-indexed, palette order).
    pub fn bar_x(&self, i: usize) -> f64 {
        self.start_x + i as f64 * self.spacing
    }
}

/// Compute bar geometry for `color_count` bars centered on a
/// `target_width * supersample` by `target_height * supersample` canvas.
///
/// Pure and total over positive inputs. `color_count` is not bounded: a count
/// large enough to overflow the canvas produces off-canvas bars rather than
/// an error.
pub fn compute_layout(
    target_width: u32,
    target_height: u32,
    color_count: usize,
    supersample: u32,
) -> Geometry {
    let render_width = target_width as u64 * supersample as u64;
    let render_height = target_height as u64 * supersample as u64;

    let scale = f64::min(
        render_width as f64 / REF_WIDTH,
        render_height as f64 / REF_HEIGHT,
    );

    let bar_width = BASE_BAR_WIDTH * scale;
    let bar_height = BASE_BAR_HEIGHT * scale;
    let spacing = BASE_SPACING * scale;
    let corner_radius = bar_width / 2.0;

    let total_group_width = spacing * (color_count.saturating_sub(1)) as f64 + bar_width;
    let start_x = (render_width as f64 - total_group_width) / 2.0;
    let start_y = (render_height as f64 - bar_height) / 2.0;

    Geometry {
        render_width,
        render_height,
        scale,
        bar_width,
        bar_height,
        spacing,
        corner_radius,
        start_x,
        start_y,
    }
}
