use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::StackedRaster;
use crate::image_pipeline::tiff::types::StackConfig;

pub trait TiffWriter {
    /// Encodes `image` as a three-band RGB TIFF and writes it to `output`.
    fn write_rgb_tiff(&self, image: &StackedRaster, output: &mut dyn Write, config: &StackConfig) -> Result<()>;
}
