//! Error types for the pill renderer.

use thiserror::Error;

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

/// Primary error type for rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid color '{0}': expected #RRGGBB hex")]
    InvalidColor(String),

    #[error("Invalid palette '{name}': {message}")]
    InvalidPalette { name: String, message: String },

    #[error("Out of memory allocating {width}x{height} canvas ({bytes} bytes)")]
    OutOfMemory {
        width: u64,
        height: u64,
        bytes: u128,
    },

    #[error("PNG encoding failed: {0}")]
    EncodeError(String),

    #[error("Palette file error: {0}")]
    PaletteFile(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::PaletteFile(format!("JSON error: {}", err))
    }
}
