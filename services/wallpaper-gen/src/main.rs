//! Palette pill wallpaper generator.
//!
//! Renders every (palette, mode) combination as a PNG wallpaper:
//! - 19 built-in 8-color palettes, plus optional user palettes from JSON
//! - Two background modes: Dark_OLED (black) and Light (warm off-white)
//! - Supersampled rendering with Lanczos downsampling for anti-aliasing
//!
//! Width and height come from flags, or from console prompts when the
//! flags are omitted.

mod batch;
mod prompt;

use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use batch::{default_modes, run_batch, BatchConfig};
use pill_render::palette::{builtin_palettes, load_palette_file};
use prompt::prompt_dimension;

const DEFAULT_WIDTH: u32 = 10080;
const DEFAULT_HEIGHT: u32 = 4320;

#[derive(Parser, Debug)]
#[command(name = "wallpaper-gen")]
#[command(about = "Batch generator for palette pill wallpapers")]
struct Args {
    /// Target width in pixels (prompted when omitted)
    #[arg(long)]
    width: Option<u32>,

    /// Target height in pixels (prompted when omitted)
    #[arg(long)]
    height: Option<u32>,

    /// Output directory for generated wallpapers
    #[arg(long, default_value = "generated_wallpapers")]
    output_dir: PathBuf,

    /// Supersampling factor (1 disables anti-aliasing)
    #[arg(long, default_value = "2")]
    supersample: u32,

    /// JSON file with additional palettes
    #[arg(long)]
    palette_file: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Resolve target resolution: flags win, otherwise prompt
    let stdin = std::io::stdin();
    let mut input = BufReader::new(stdin.lock());
    let mut output = std::io::stdout();

    let width = match args.width {
        Some(w) => w,
        None => prompt_dimension("Width", DEFAULT_WIDTH, &mut input, &mut output)?,
    };
    let height = match args.height {
        Some(h) => h,
        None => prompt_dimension("Height", DEFAULT_HEIGHT, &mut input, &mut output)?,
    };

    // Assemble the palette list: built-ins first, then any user palettes
    let mut palettes = builtin_palettes().to_vec();
    if let Some(path) = &args.palette_file {
        let extra = load_palette_file(path)?;
        info!(count = extra.len(), file = %path.display(), "loaded user palettes");
        palettes.extend(extra);
    }

    let modes = default_modes();
    info!(
        width,
        height,
        palettes = palettes.len(),
        variations = modes.len(),
        "starting generation"
    );

    let config = BatchConfig {
        width,
        height,
        supersample: args.supersample.max(1),
        output_dir: args.output_dir.clone(),
    };

    let summary = run_batch(&config, &modes, &palettes)?;

    info!(
        written = summary.written,
        failed = summary.failed,
        output_dir = %args.output_dir.display(),
        "done"
    );

    Ok(())
}
