//! Square grayscale rasters and glyph drawing.

use super::font::{GlyphFont, RenderOptions};

/// A square grid of luminance samples (0 = black, 255 = white).
///
/// Produced by [`render`] and treated as immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    size: usize,
    pixels: Vec<u8>,
}

impl Raster {
    /// An all-white canvas of `size x size` pixels.
    pub fn white(size: usize) -> Self {
        Self {
            size,
            pixels: vec![255; size * size],
        }
    }

    /// Build a raster from raw luminance samples.
    ///
    /// # Panics
    /// Panics unless `pixels` holds exactly `size * size` samples.
    pub fn from_pixels(size: usize, pixels: Vec<u8>) -> Self {
        assert_eq!(pixels.len(), size * size, "raster needs size * size samples");
        Self { size, pixels }
    }

    /// Canvas edge length in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Luminance samples in row-major order.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Luminance at (x, y).
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.size + x]
    }

    /// Blend glyph coverage into the canvas: full coverage turns the
    /// pixel black, partial coverage darkens proportionally. Overlapping
    /// draws keep the darker value.
    fn darken(&mut self, x: usize, y: usize, coverage: u8) {
        let idx = y * self.size + x;
        let luminance = 255 - coverage;
        if luminance < self.pixels[idx] {
            self.pixels[idx] = luminance;
        }
    }
}

/// Render a character onto a white square canvas, glyph centered.
///
/// Never fails: when no font source loaded, the fallback renderer draws
/// a boxed placeholder instead, so output is degraded but non-empty.
/// Output is always `canvas_size x canvas_size` and deterministic for
/// identical inputs.
pub fn render(character: char, font: &GlyphFont, opts: &RenderOptions) -> Raster {
    match font {
        GlyphFont::Loaded(font) => render_glyph(character, font, opts),
        GlyphFont::Fallback => render_placeholder(opts),
    }
}

fn render_glyph(character: char, font: &fontdue::Font, opts: &RenderOptions) -> Raster {
    let mut raster = Raster::white(opts.canvas_size);

    if font.lookup_glyph_index(character) == 0 {
        log::debug!("font has no glyph for {:?}, drawing .notdef", character);
    }

    let (metrics, coverage) = font.rasterize(character, opts.point_size);
    if metrics.width == 0 || metrics.height == 0 {
        return raster;
    }

    // Center the glyph's visual bounding box on the canvas
    let x0 = opts.canvas_size.saturating_sub(metrics.width) / 2;
    let y0 = opts.canvas_size.saturating_sub(metrics.height) / 2;

    for row in 0..metrics.height {
        let y = y0 + row;
        if y >= opts.canvas_size {
            break;
        }
        for col in 0..metrics.width {
            let x = x0 + col;
            if x >= opts.canvas_size {
                break;
            }
            raster.darken(x, y, coverage[row * metrics.width + col]);
        }
    }

    raster
}

/// Degraded placeholder used when no font could be loaded: a hollow box
/// centered on the canvas, echoing the boxed fallback the table consumer
/// draws for unknown characters.
fn render_placeholder(opts: &RenderOptions) -> Raster {
    let size = opts.canvas_size;
    let mut raster = Raster::white(size);
    if size == 0 {
        return raster;
    }

    let margin = size / 8;
    let thickness = (size / 25).max(1);

    for y in margin..size - margin {
        for x in margin..size - margin {
            let on_border = x < margin + thickness
                || x >= size - margin - thickness
                || y < margin + thickness
                || y >= size - margin - thickness;
            if on_border {
                raster.darken(x, y, 255);
            }
        }
    }

    raster
}
