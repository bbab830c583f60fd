//! Logical pixel grid layout and block upscaling.

use image::RgbImage;
use tracing::{debug, info};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::hex::color::Color;

/// Layout of `count` logical pixels in rows of `columns`, each drawn as a
/// `scale` x `scale` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalGrid {
    pub count: usize,
    pub columns: u32,
    pub rows: u32,
    pub scale: u32,
}

impl LogicalGrid {
    pub fn new(count: usize, columns: u32, scale: u32) -> Result<Self> {
        if count == 0 {
            return Err(ConversionError::InvalidParameter(
                "no valid color data to lay out".to_string(),
            ));
        }
        if columns == 0 {
            return Err(ConversionError::InvalidParameter(
                "logical column count must be positive".to_string(),
            ));
        }
        if scale == 0 {
            return Err(ConversionError::InvalidParameter(
                "scale factor must be positive".to_string(),
            ));
        }

        let rows = u32::try_from(count.div_ceil(columns as usize))
            .map_err(|_| ConversionError::InvalidDimensions(columns as usize, count))?;

        let grid = Self {
            count,
            columns,
            rows,
            scale,
        };
        grid.output_dimensions()?;
        Ok(grid)
    }

    /// Final image size as `(width, height)` in pixels.
    pub fn output_dimensions(&self) -> Result<(u32, u32)> {
        let width = self.columns.checked_mul(self.scale);
        let height = self.rows.checked_mul(self.scale);
        match (width, height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Ok((w, h)),
            _ => Err(ConversionError::InvalidDimensions(
                self.columns as usize * self.scale as usize,
                self.rows as usize * self.scale as usize,
            )),
        }
    }

    /// Logical `(column, row)` of the color at `index`.
    pub fn cell(&self, index: usize) -> (u32, u32) {
        let columns = self.columns as usize;
        ((index % columns) as u32, (index / columns) as u32)
    }

    /// Top-left output pixel of the block for the color at `index`.
    pub fn anchor(&self, index: usize) -> (u32, u32) {
        let (column, row) = self.cell(index);
        (column * self.scale, row * self.scale)
    }
}

/// Lays `colors` out on a black canvas, one `scale` x `scale` block each.
///
/// Sub-pixels of a block that fall outside the canvas are skipped; cells of
/// a partial last row that have no color stay black.
pub fn assemble_image(colors: &[Color], columns: u32, scale: u32) -> Result<RgbImage> {
    let grid = LogicalGrid::new(colors.len(), columns, scale)?;
    let (width, height) = grid.output_dimensions()?;

    info!(
        logical_pixels = grid.count,
        columns = grid.columns,
        rows = grid.rows,
        scale = grid.scale,
        "Image dimensions: {}x{}",
        width,
        height
    );

    let mut image = RgbImage::new(width, height);

    for (index, color) in colors.iter().enumerate() {
        let (start_x, start_y) = grid.anchor(index);
        fill_block(&mut image, start_x, start_y, scale, color.to_rgb());
    }

    debug!("Filled {} blocks", colors.len());
    Ok(image)
}

fn fill_block(image: &mut RgbImage, start_x: u32, start_y: u32, size: u32, pixel: image::Rgb<u8>) {
    let (width, height) = image.dimensions();
    for offset_y in 0..size {
        for offset_x in 0..size {
            let x = start_x + offset_x;
            let y = start_y + offset_y;
            if x < width && y < height {
                image.put_pixel(x, y, pixel);
            }
        }
    }
}
