use std::path::Path;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::BandRaster;

pub trait BandReader {
    /// Reads band 1 of the raster at `path`.
    fn read_band(&self, path: &Path) -> Result<BandRaster>;
}
