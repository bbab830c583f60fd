//! Image construction pipelines
//!
//! Two independent conversions share this module: stacking three single-band
//! rasters into an RGB TIFF, and decoding 12-bit hex color files into
//! block-scaled images.

pub mod raster;
pub mod tiff;
pub mod hex;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use raster::{
    BandRaster,
    BandReader,
    BandSamples,
    GeoMetadata,
    StackedRaster,
    TiffBandReader,
};

pub use self::tiff::{
    TiffCompression,
    StackConfig,
    StackConfigBuilder,
    TiffWriter,
    StandardTiffWriter,
};

pub use hex::{
    Color,
    HexImageConfig,
    HexImageConfigBuilder,
    LoadedColors,
    TokenFailure,
    decode_hex_color,
};

pub use conversions::{
    BandPaths,
    BandStackPipeline,
    HexConversionSummary,
    HexToImagePipeline,
};
