use std::path::Path;

use image::{ImageError, ImageFormat, RgbImage};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::hex::writer::RgbImageWriter;

/// Saves through the `image` crate; the format follows the path extension.
pub struct StandardImageWriter;

impl RgbImageWriter for StandardImageWriter {
    fn write_image(&self, image: &RgbImage, path: &Path) -> Result<()> {
        let format = ImageFormat::from_path(path).map_err(|e| {
            ConversionError::UnsupportedFormat(format!("{}: {}", path.display(), e))
        })?;
        debug!(
            "Saving {}x{} image as {:?}",
            image.width(),
            image.height(),
            format
        );

        image.save_with_format(path, format).map_err(|e| match e {
            ImageError::IoError(io) => {
                ConversionError::OutputWriteError(format!("{}: {}", path.display(), io))
            }
            other => ConversionError::EncodeError(format!("{}: {}", path.display(), other)),
        })
    }
}
