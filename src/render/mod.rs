//! Glyph rendering: a character plus a font capability in, a centered
//! grayscale raster out.

mod font;
mod raster;

pub use font::{resolve_font, GlyphFont, RenderOptions};
pub use raster::{render, Raster};
