use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    raster::{BandReader, StackedRaster, TiffBandReader, stack_bands},
    tiff::{StackConfig, StandardTiffWriter, TiffWriter},
};

/// Paths of the three single-band inputs, in (R, G, B) order.
#[derive(Debug, Clone, Copy)]
pub struct BandPaths<'a> {
    pub red: &'a Path,
    pub green: &'a Path,
    pub blue: &'a Path,
}

impl<'a> BandPaths<'a> {
    pub fn new<P: AsRef<Path> + ?Sized>(red: &'a P, green: &'a P, blue: &'a P) -> Self {
        Self {
            red: red.as_ref(),
            green: green.as_ref(),
            blue: blue.as_ref(),
        }
    }
}

pub struct BandStackPipeline<R: BandReader, W: TiffWriter> {
    reader: R,
    writer: W,
    config: StackConfig,
}

impl BandStackPipeline<TiffBandReader, StandardTiffWriter> {
    pub fn new(config: StackConfig) -> Self {
        Self {
            reader: TiffBandReader,
            writer: StandardTiffWriter,
            config,
        }
    }
}

impl<R: BandReader, W: TiffWriter> BandStackPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: StackConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Reads the three bands and stacks them without writing anything.
    #[instrument(skip(self, paths))]
    pub fn stack(&self, paths: BandPaths<'_>) -> Result<StackedRaster> {
        let (red, green, blue) = {
            let _span = tracing::info_span!("read_bands").entered();
            (
                self.reader.read_band(paths.red)?,
                self.reader.read_band(paths.green)?,
                self.reader.read_band(paths.blue)?,
            )
        };

        let stacked = {
            let _span = tracing::info_span!("stack_bands").entered();
            stack_bands(red, green, blue)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = stacked.width,
                height = stacked.height
            ).entered();
            self.validate_dimensions(stacked.width, stacked.height)?;
        }

        Ok(stacked)
    }

    #[instrument(skip(self, paths, output))]
    pub fn convert(&self, paths: BandPaths<'_>, output: &mut dyn Write) -> Result<()> {
        info!("Starting band stack");

        let stacked = self.stack(paths)?;

        {
            let _span = tracing::info_span!("encode_tiff").entered();
            self.writer.write_rgb_tiff(&stacked, output, &self.config)?;
        }

        info!(
            width = stacked.width,
            height = stacked.height,
            sample_type = stacked.red().type_name(),
            "Band stack complete"
        );
        Ok(())
    }

    /// Stacks the bands into an RGB TIFF at `output_path`.
    ///
    /// The output file is only created once the image has been encoded, so a
    /// failed validation leaves no file behind.
    #[instrument(skip(self, paths, output_path))]
    pub fn convert_file<Q: AsRef<Path>>(&self, paths: BandPaths<'_>, output_path: Q) -> Result<()> {
        let output_path = output_path.as_ref();

        info!(
            red = %paths.red.display(),
            green = %paths.green.display(),
            blue = %paths.blue.display(),
            output = %output_path.display(),
            "Stacking bands"
        );

        let mut encoded = Vec::new();
        self.convert(paths, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(())
    }
}
