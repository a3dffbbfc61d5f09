//! Batch driver: the mode × palette generation loop.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use pill_render::png::encode_png_auto;
use pill_render::{render, Palette, Rgb, RenderRequest, RenderResult};

/// A background variation. The set of modes is fixed and ordered.
#[derive(Debug, Clone)]
pub struct Mode {
    pub name: &'static str,
    pub background: Rgb,
}

/// The two shipped modes, in generation order: OLED black, then a warm
/// Solarized-paper off-white.
pub fn default_modes() -> Vec<Mode> {
    vec![
        Mode {
            name: "Dark_OLED",
            background: Rgb::new(0x00, 0x00, 0x00),
        },
        Mode {
            name: "Light",
            background: Rgb::new(0xFD, 0xF6, 0xE3),
        },
    ]
}

/// One full batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub width: u32,
    pub height: u32,
    pub supersample: u32,
    pub output_dir: PathBuf,
}

/// Outcome counts for a completed batch.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub failed: usize,
}

/// Output name for one (palette, mode) combination.
pub fn output_filename(palette: &str, mode: &str, width: u32, height: u32) -> String {
    format!("{}_{}_{}x{}.png", palette, mode, width, height)
}

/// Render and write every (mode, palette) combination.
///
/// Failures are contained per combination: a render or write error is logged
/// and the loop moves on, so one oversized allocation never takes down the
/// rest of the batch. Only being unable to create the output directory is
/// fatal.
pub fn run_batch(config: &BatchConfig, modes: &[Mode], palettes: &[Palette]) -> Result<BatchSummary> {
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "creating output directory {}",
            config.output_dir.display()
        )
    })?;

    let mut summary = BatchSummary::default();

    for mode in modes {
        info!(
            mode = mode.name,
            background = %mode.background.to_hex(),
            "generating mode"
        );

        for palette in palettes {
            let filename = output_filename(&palette.name, mode.name, config.width, config.height);
            let path = config.output_dir.join(&filename);

            match generate_one(config, mode, palette, &path) {
                Ok(()) => {
                    info!(file = %path.display(), "saved");
                    summary.written += 1;
                }
                Err(e) => {
                    warn!(
                        palette = %palette.name,
                        mode = mode.name,
                        error = %e,
                        "skipping combination"
                    );
                    summary.failed += 1;
                }
            }
        }
    }

    Ok(summary)
}

/// Render one combination and write it to `path`.
fn generate_one(
    config: &BatchConfig,
    mode: &Mode,
    palette: &Palette,
    path: &Path,
) -> Result<()> {
    let request = RenderRequest {
        target_width: config.width,
        target_height: config.height,
        colors: &palette.colors,
        background: mode.background,
        supersample: config.supersample,
    };

    let image = render(&request)?;
    let png = encode_image(&image)?;
    std::fs::write(path, png).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn encode_image(image: &image::RgbImage) -> RenderResult<Vec<u8>> {
    encode_png_auto(
        image.as_raw(),
        image.width() as usize,
        image.height() as usize,
    )
}
