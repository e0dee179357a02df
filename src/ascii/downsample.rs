//! Area-averaging downsampler for converting rasters to cell grids.

/// Downsample a grayscale raster to a cell grid.
///
/// Maps raster pixels to grid cells by averaging the luminance of all
/// pixels within each cell. Area averaging (rather than nearest-neighbor
/// sampling) keeps thin glyph strokes from aliasing away at low grid
/// resolutions.
///
/// # Arguments
/// * `gray` - Grayscale pixel data (one byte per pixel, row-major order)
/// * `img_width` - Width of the source raster in pixels
/// * `img_height` - Height of the source raster in pixels
/// * `cell_width` - Desired output width in cells
/// * `cell_height` - Desired output height in cells
///
/// # Returns
/// A vector of luminance values (0-255), one per cell, in row-major order.
/// The length is `cell_width * cell_height`.
pub fn downsample(
    gray: &[u8],
    img_width: u32,
    img_height: u32,
    cell_width: u16,
    cell_height: u16,
) -> Vec<u8> {
    if cell_width == 0 || cell_height == 0 || img_width == 0 || img_height == 0 || gray.is_empty() {
        return Vec::new();
    }

    // Cell size in pixels, as floats for accurate mapping
    let cell_w = img_width as f32 / cell_width as f32;
    let cell_h = img_height as f32 / cell_height as f32;

    let mut result = Vec::with_capacity((cell_width as usize) * (cell_height as usize));

    for cy in 0..cell_height {
        for cx in 0..cell_width {
            let start_x = (cx as f32 * cell_w) as u32;
            let end_x = ((cx + 1) as f32 * cell_w) as u32;
            let start_y = (cy as f32 * cell_h) as u32;
            let end_y = ((cy + 1) as f32 * cell_h) as u32;

            let mut sum = 0u32;
            let mut count = 0u32;

            for py in start_y..end_y {
                for px in start_x..end_x {
                    let idx = (py * img_width + px) as usize;
                    if idx < gray.len() {
                        sum += gray[idx] as u32;
                        count += 1;
                    }
                }
            }

            // Cells past the raster edge read as white background
            result.push(if count > 0 { (sum / count) as u8 } else { 255 });
        }
    }

    result
}
