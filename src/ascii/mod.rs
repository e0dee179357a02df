//! ASCII quantization pipeline.
//!
//! Converts a rendered glyph raster into a fixed-size grid of ramp
//! symbols:
//!
//! 1. **Downsampling** - area-average the raster down to the cell grid
//! 2. **Symbol mapping** - map each cell's luminance onto a density ramp

mod downsample;
mod quantize;
mod ramp;

pub use downsample::downsample;
pub use quantize::{quantize, ArtGrid};
pub use ramp::{DensityRamp, RampError, DEFAULT_RAMP};
