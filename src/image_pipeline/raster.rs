//! Raster band reading and stacking
//!
//! Reads single bands from TIFF/GeoTIFF files and stacks three of them into
//! an RGB raster.

mod reader;
mod tiff_band_reader;
mod stacker;
pub mod types;

pub use reader::BandReader;
pub use tiff_band_reader::{TiffBandReader, read_first_band};
pub use stacker::stack_bands;
pub use types::{BandRaster, BandSamples, GeoMetadata, StackedRaster};
