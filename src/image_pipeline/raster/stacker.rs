use tracing::warn;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raster::types::{BandRaster, StackedRaster};

/// Stacks three single-band rasters into one (R, G, B) raster.
///
/// The bands must agree on `(height, width)` and on sample type. Output
/// metadata is the red band's, unmerged: georeferencing or nodata values
/// that differ on the green or blue band are dropped.
pub fn stack_bands(red: BandRaster, green: BandRaster, blue: BandRaster) -> Result<StackedRaster> {
    if red.shape() != green.shape() || red.shape() != blue.shape() {
        return Err(ConversionError::DimensionMismatch {
            red: red.shape(),
            green: green.shape(),
            blue: blue.shape(),
        });
    }

    let types = [
        red.samples.type_name(),
        green.samples.type_name(),
        blue.samples.type_name(),
    ];
    if types[0] != types[1] || types[0] != types[2] {
        return Err(ConversionError::BandTypeMismatch {
            red: types[0],
            green: types[1],
            blue: types[2],
        });
    }

    if green.metadata != red.metadata || blue.metadata != red.metadata {
        warn!("Band metadata differs; using the red band's georeferencing and nodata value");
    }

    Ok(StackedRaster {
        width: red.width,
        height: red.height,
        metadata: red.metadata,
        bands: [red.samples, green.samples, blue.samples],
    })
}
