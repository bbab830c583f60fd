//! Hex-to-image conversion configuration

use std::path::PathBuf;

/// Input file read when no path is given
pub const DEFAULT_INPUT_PATH: &str = "image.txt";
/// Output file written when no path is given
pub const DEFAULT_OUTPUT_PATH: &str = "hex_image.png";
/// Logical pixels per row before scaling
pub const DEFAULT_LOGICAL_COLUMNS: u32 = 320;
/// Side of the square block each logical pixel becomes
pub const DEFAULT_SCALE_FACTOR: u32 = 2;

/// Configuration for hex color file to image conversion
#[derive(Debug, Clone)]
pub struct HexImageConfig {
    /// Text file of whitespace-separated hex color tokens
    pub input_path: PathBuf,
    /// Image to write; the format follows the extension
    pub output_path: PathBuf,
    /// Logical pixels per row
    pub logical_columns: u32,
    /// Block size in output pixels per logical pixel
    pub scale_factor: u32,
    /// Abort instead of skipping when any token fails to decode
    pub fail_on_invalid_tokens: bool,
}

impl Default for HexImageConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            logical_columns: DEFAULT_LOGICAL_COLUMNS,
            scale_factor: DEFAULT_SCALE_FACTOR,
            fail_on_invalid_tokens: false,
        }
    }
}

impl HexImageConfig {
    pub fn builder() -> HexImageConfigBuilder {
        HexImageConfigBuilder::default()
    }
}

/// Builder for HexImageConfig
#[derive(Default)]
pub struct HexImageConfigBuilder {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    logical_columns: Option<u32>,
    scale_factor: Option<u32>,
    fail_on_invalid_tokens: Option<bool>,
}

impl HexImageConfigBuilder {
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn logical_columns(mut self, columns: u32) -> Self {
        self.logical_columns = Some(columns);
        self
    }

    pub fn scale_factor(mut self, scale: u32) -> Self {
        self.scale_factor = Some(scale);
        self
    }

    pub fn fail_on_invalid_tokens(mut self, strict: bool) -> Self {
        self.fail_on_invalid_tokens = Some(strict);
        self
    }

    pub fn build(self) -> HexImageConfig {
        let default = HexImageConfig::default();
        HexImageConfig {
            input_path: self.input_path.unwrap_or(default.input_path),
            output_path: self.output_path.unwrap_or(default.output_path),
            logical_columns: self.logical_columns.unwrap_or(default.logical_columns),
            scale_factor: self.scale_factor.unwrap_or(default.scale_factor),
            fail_on_invalid_tokens: self.fail_on_invalid_tokens.unwrap_or(default.fail_on_invalid_tokens),
        }
    }
}
