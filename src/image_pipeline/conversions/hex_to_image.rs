use std::path::Path;

use image::RgbImage;
use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    hex::{
        HexColorReader, HexFileLoader, HexImageConfig, LoadedColors, RgbImageWriter,
        StandardImageWriter, TokenFailure, assemble_image, parse_hex_text,
    },
};

/// Outcome of a successful hex-to-image run.
#[derive(Debug, Clone)]
pub struct HexConversionSummary {
    pub logical_pixels: usize,
    pub width: u32,
    pub height: u32,
    /// Tokens skipped while loading
    pub skipped: Vec<TokenFailure>,
}

pub struct HexToImagePipeline<R: HexColorReader, W: RgbImageWriter> {
    reader: R,
    writer: W,
    config: HexImageConfig,
}

impl HexToImagePipeline<HexFileLoader, StandardImageWriter> {
    pub fn new(config: HexImageConfig) -> Self {
        Self {
            reader: HexFileLoader,
            writer: StandardImageWriter,
            config,
        }
    }
}

impl<R: HexColorReader, W: RgbImageWriter> HexToImagePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: HexImageConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Builds the image from already-loaded colors.
    ///
    /// In strict mode any skipped token aborts before layout.
    pub fn render(&self, loaded: &LoadedColors) -> Result<RgbImage> {
        if loaded.has_failures() {
            if self.config.fail_on_invalid_tokens {
                return Err(ConversionError::MalformedTokens {
                    count: loaded.failures.len(),
                });
            }
            warn!("{} invalid token(s) skipped", loaded.failures.len());
        }

        let _span = tracing::info_span!("assemble_image",
            logical_pixels = loaded.colors.len()
        ).entered();
        assemble_image(
            &loaded.colors,
            self.config.logical_columns,
            self.config.scale_factor,
        )
    }

    /// Decodes in-memory hex text into an image.
    pub fn convert_text(&self, text: &str) -> Result<RgbImage> {
        self.render(&parse_hex_text(text))
    }

    /// Reads `input_path`, assembles the image and saves it to `output_path`.
    ///
    /// Nothing is written unless the whole image was assembled.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<HexConversionSummary> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            columns = self.config.logical_columns,
            scale = self.config.scale_factor,
            "Converting hex color file"
        );

        let loaded = {
            let _span = tracing::info_span!("read_colors").entered();
            self.reader.read_colors(input_path)?
        };

        let image = self.render(&loaded)?;

        {
            let _span = tracing::info_span!("write_image").entered();
            self.writer.write_image(&image, output_path)?;
        }

        info!(
            width = image.width(),
            height = image.height(),
            "Image saved to {}",
            output_path.display()
        );

        Ok(HexConversionSummary {
            logical_pixels: loaded.colors.len(),
            width: image.width(),
            height: image.height(),
            skipped: loaded.failures,
        })
    }

    /// Runs with the input and output paths from the configuration.
    pub fn run(&self) -> Result<HexConversionSummary> {
        self.convert_file(&self.config.input_path, &self.config.output_path)
    }

    pub fn config(&self) -> &HexImageConfig {
        &self.config
    }
}
