//! TIFF writing module
//!
//! Encodes stacked rasters as three-band RGB TIFFs with configurable
//! compression, keeping the source GeoTIFF tags.

mod writer;
mod colortype;
mod standard_tiff_writer;
pub mod types;

pub use writer::TiffWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use colortype::{RGBI8, RGBI16, RGBI32, RGBI64};
pub use types::{TiffCompression, StackConfig, StackConfigBuilder};
