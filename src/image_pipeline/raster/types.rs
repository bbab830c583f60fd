//! Single-band and stacked raster types

use crate::image_pipeline::common::error::Shape;

/// Samples of one raster band, row-major.
#[derive(Debug, Clone, PartialEq)]
pub enum BandSamples {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    U64(Vec<u64>),
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl BandSamples {
    pub fn len(&self) -> usize {
        match self {
            BandSamples::U8(v) => v.len(),
            BandSamples::U16(v) => v.len(),
            BandSamples::U32(v) => v.len(),
            BandSamples::U64(v) => v.len(),
            BandSamples::I8(v) => v.len(),
            BandSamples::I16(v) => v.len(),
            BandSamples::I32(v) => v.len(),
            BandSamples::I64(v) => v.len(),
            BandSamples::F32(v) => v.len(),
            BandSamples::F64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the sample type, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            BandSamples::U8(_) => "u8",
            BandSamples::U16(_) => "u16",
            BandSamples::U32(_) => "u32",
            BandSamples::U64(_) => "u64",
            BandSamples::I8(_) => "i8",
            BandSamples::I16(_) => "i16",
            BandSamples::I32(_) => "i32",
            BandSamples::I64(_) => "i64",
            BandSamples::F32(_) => "f32",
            BandSamples::F64(_) => "f64",
        }
    }
}

/// GeoTIFF georeferencing carried alongside a band.
///
/// Every field is optional; a plain TIFF yields `GeoMetadata::default()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoMetadata {
    /// ModelPixelScaleTag (33550): pixel size in model units
    pub pixel_scale: Option<Vec<f64>>,
    /// ModelTiepointTag (33922)
    pub tiepoints: Option<Vec<f64>>,
    /// ModelTransformationTag (34264): 4x4 affine transform
    pub transformation: Option<Vec<f64>>,
    /// GeoKeyDirectoryTag (34735): CRS definition keys
    pub geo_key_directory: Option<Vec<u16>>,
    /// GeoDoubleParamsTag (34736)
    pub geo_double_params: Option<Vec<f64>>,
    /// GeoAsciiParamsTag (34737)
    pub geo_ascii_params: Option<String>,
    /// GDAL_NODATA (42113), stored as text the way GDAL writes it
    pub nodata: Option<String>,
}

impl GeoMetadata {
    pub fn is_empty(&self) -> bool {
        *self == GeoMetadata::default()
    }
}

/// One band read from a raster file
#[derive(Debug, Clone)]
pub struct BandRaster {
    /// Width of the band in pixels
    pub width: usize,
    /// Height of the band in pixels
    pub height: usize,
    /// Row-major samples, `width * height` long
    pub samples: BandSamples,
    /// Georeferencing read from the source file
    pub metadata: GeoMetadata,
}

impl BandRaster {
    pub fn shape(&self) -> Shape {
        (self.height, self.width)
    }
}

/// Three bands of identical shape and sample type, ordered (R, G, B).
#[derive(Debug, Clone)]
pub struct StackedRaster {
    pub width: usize,
    pub height: usize,
    /// Bands in (band, row, col) order
    pub bands: [BandSamples; 3],
    /// Output metadata, adopted from the red band
    pub metadata: GeoMetadata,
}

impl StackedRaster {
    pub fn red(&self) -> &BandSamples {
        &self.bands[0]
    }

    pub fn green(&self) -> &BandSamples {
        &self.bands[1]
    }

    pub fn blue(&self) -> &BandSamples {
        &self.bands[2]
    }
}

/// TIFF tag numbers of the GeoTIFF and GDAL tags carried by [`GeoMetadata`].
pub mod geo_tags {
    pub const MODEL_PIXEL_SCALE: u16 = 33550;
    pub const MODEL_TIEPOINT: u16 = 33922;
    pub const MODEL_TRANSFORMATION: u16 = 34264;
    pub const GEO_KEY_DIRECTORY: u16 = 34735;
    pub const GEO_DOUBLE_PARAMS: u16 = 34736;
    pub const GEO_ASCII_PARAMS: u16 = 34737;
    pub const GDAL_NODATA: u16 = 42113;
}
