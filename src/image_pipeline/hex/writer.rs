use std::path::Path;

use image::RgbImage;

use crate::image_pipeline::common::error::Result;

pub trait RgbImageWriter {
    fn write_image(&self, image: &RgbImage, path: &Path) -> Result<()>;
}
