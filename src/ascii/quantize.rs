//! Luminance quantization: raster to symbol grid.

use super::downsample::downsample;
use super::ramp::DensityRamp;
use crate::render::Raster;

/// A rectangular grid of ramp symbols approximating a glyph's shape.
///
/// Invariant: every row holds exactly `width` symbols and there are
/// exactly `height` rows. Only [`quantize`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtGrid {
    width: u16,
    height: u16,
    rows: Vec<String>,
}

impl ArtGrid {
    /// Grid width in symbols.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Grid height in rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The grid rows, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

/// Quantize a raster into an `width x height` symbol grid.
///
/// The raster is downsampled with area averaging, then each cell's
/// luminance `g` is mapped to a ramp level:
///
/// ```text
/// index = (255 - g) * (len(ramp) - 1) / 255
/// ```
///
/// so white (255) maps to the lightest symbol and black (0) to the
/// densest. Integer math keeps the mapping deterministic; the index is
/// clamped to the ramp bounds regardless.
pub fn quantize(raster: &Raster, width: u16, height: u16, ramp: &DensityRamp) -> ArtGrid {
    let size = raster.size() as u32;
    let cells = downsample(raster.pixels(), size, size, width, height);

    let levels = ramp.len();
    let mut rows = Vec::with_capacity(height as usize);

    for cy in 0..height as usize {
        let mut row = String::with_capacity(width as usize);
        for cx in 0..width as usize {
            // Degenerate rasters read as white background
            let g = cells.get(cy * width as usize + cx).copied().unwrap_or(255) as usize;
            let index = (255 - g) * (levels - 1) / 255;
            row.push(ramp.symbol(index));
        }
        rows.push(row);
    }

    ArtGrid {
        width,
        height,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Raster;

    #[test]
    fn test_quantize_dimensions() {
        let raster = Raster::white(8);
        let grid = quantize(&raster, 5, 3, &DensityRamp::default());
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.rows().len(), 3);
        for row in grid.rows() {
            assert_eq!(row.chars().count(), 5);
        }
    }

    #[test]
    fn test_quantize_white_maps_to_lightest() {
        let raster = Raster::white(4);
        let grid = quantize(&raster, 2, 2, &DensityRamp::default());
        for row in grid.rows() {
            assert_eq!(row, "  ");
        }
    }
}
