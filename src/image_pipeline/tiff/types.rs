//! RGB TIFF output configuration types

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level
    DeflateFast,
    /// Deflate compression - balanced
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}

/// Configuration for writing a stacked RGB TIFF
#[derive(Debug, Clone)]
pub struct StackConfig {
    /// Compression method to use
    pub compression: TiffCompression,
    /// Predictor value for compression (2 for horizontal differencing)
    pub predictor: Option<u16>,
    /// Whether to copy GeoTIFF tags from the red band to the output
    pub copy_georeferencing: bool,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            compression: TiffCompression::None,
            predictor: None,
            copy_georeferencing: true,
        }
    }
}

impl StackConfig {
    pub fn builder() -> StackConfigBuilder {
        StackConfigBuilder::default()
    }
}

/// Builder for StackConfig
#[derive(Default)]
pub struct StackConfigBuilder {
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    copy_georeferencing: Option<bool>,
}

impl StackConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn copy_georeferencing(mut self, copy: bool) -> Self {
        self.copy_georeferencing = Some(copy);
        self
    }

    pub fn build(self) -> StackConfig {
        let default = StackConfig::default();
        StackConfig {
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            copy_georeferencing: self.copy_georeferencing.unwrap_or(default.copy_georeferencing),
        }
    }
}
