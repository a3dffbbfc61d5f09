//! Rendering library for palette pill wallpapers.
//!
//! Pipeline: a [`RenderRequest`] is laid out by the layout engine
//! ([`layout::compute_layout`]), rasterized onto a supersampled RGB canvas,
//! downsampled with Lanczos3 for anti-aliasing, and encoded as PNG.

pub mod canvas;
pub mod color;
pub mod error;
pub mod layout;
pub mod palette;
pub mod png;
pub mod render;

pub use color::Rgb;
pub use error::{RenderError, RenderResult};
pub use layout::Geometry;
pub use palette::Palette;
pub use render::{render, RenderRequest};
