use std::io::{Cursor, Write};

use tiff::encoder::{TiffEncoder, TiffValue, colortype};
use tiff::tags::{Predictor, Tag};
use tracing::{debug, warn};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raster::types::{BandSamples, GeoMetadata, StackedRaster, geo_tags};
use crate::image_pipeline::tiff::colortype::{RGBI8, RGBI16, RGBI32, RGBI64};
use crate::image_pipeline::tiff::types::{StackConfig, TiffCompression};
use crate::image_pipeline::tiff::writer::TiffWriter;

/// Writes pixel-interleaved RGB TIFFs with the `tiff` crate, carrying
/// GeoTIFF tags over from the stacked raster's metadata.
pub struct StandardTiffWriter;

impl TiffWriter for StandardTiffWriter {
    fn write_rgb_tiff(&self, image: &StackedRaster, output: &mut dyn Write, config: &StackConfig) -> Result<()> {
        debug!(
            "Encoding RGB TIFF image: {}x{} {}",
            image.width,
            image.height,
            image.red().type_name()
        );

        let width = u32::try_from(image.width)
            .map_err(|_| ConversionError::InvalidDimensions(image.width, image.height))?;
        let height = u32::try_from(image.height)
            .map_err(|_| ConversionError::InvalidDimensions(image.width, image.height))?;
        let metadata = config.copy_georeferencing.then_some(&image.metadata);

        let mut buffer = Vec::new();

        match (image.red(), image.green(), image.blue()) {
            (BandSamples::U8(r), BandSamples::U8(g), BandSamples::U8(b)) => {
                encode_rgb::<colortype::RGB8>(&mut buffer, width, height, &interleave(r, g, b), metadata, config, true)?
            }
            (BandSamples::U16(r), BandSamples::U16(g), BandSamples::U16(b)) => {
                encode_rgb::<colortype::RGB16>(&mut buffer, width, height, &interleave(r, g, b), metadata, config, true)?
            }
            (BandSamples::U32(r), BandSamples::U32(g), BandSamples::U32(b)) => {
                encode_rgb::<colortype::RGB32>(&mut buffer, width, height, &interleave(r, g, b), metadata, config, true)?
            }
            (BandSamples::U64(r), BandSamples::U64(g), BandSamples::U64(b)) => {
                encode_rgb::<colortype::RGB64>(&mut buffer, width, height, &interleave(r, g, b), metadata, config, true)?
            }
            (BandSamples::I8(r), BandSamples::I8(g), BandSamples::I8(b)) => {
                encode_rgb::<RGBI8>(&mut buffer, width, height, &interleave(r, g, b), metadata, config, true)?
            }
            (BandSamples::I16(r), BandSamples::I16(g), BandSamples::I16(b)) => {
                encode_rgb::<RGBI16>(&mut buffer, width, height, &interleave(r, g, b), metadata, config, true)?
            }
            (BandSamples::I32(r), BandSamples::I32(g), BandSamples::I32(b)) => {
                encode_rgb::<RGBI32>(&mut buffer, width, height, &interleave(r, g, b), metadata, config, true)?
            }
            (BandSamples::I64(r), BandSamples::I64(g), BandSamples::I64(b)) => {
                encode_rgb::<RGBI64>(&mut buffer, width, height, &interleave(r, g, b), metadata, config, true)?
            }
            (BandSamples::F32(r), BandSamples::F32(g), BandSamples::F32(b)) => {
                encode_rgb::<colortype::RGB32Float>(&mut buffer, width, height, &interleave(r, g, b), metadata, config, false)?
            }
            (BandSamples::F64(r), BandSamples::F64(g), BandSamples::F64(b)) => {
                encode_rgb::<colortype::RGB64Float>(&mut buffer, width, height, &interleave(r, g, b), metadata, config, false)?
            }
            (r, g, b) => {
                return Err(ConversionError::BandTypeMismatch {
                    red: r.type_name(),
                    green: g.type_name(),
                    blue: b.type_name(),
                });
            }
        }

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

fn encode_rgb<C>(
    buffer: &mut Vec<u8>,
    width: u32,
    height: u32,
    data: &[C::Inner],
    metadata: Option<&GeoMetadata>,
    config: &StackConfig,
    integer_samples: bool,
) -> Result<()>
where
    C: colortype::ColorType,
    [C::Inner]: TiffValue,
{
    let compression = match config.compression {
        TiffCompression::None => tiff::encoder::Compression::Uncompressed,
        TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
        TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
        TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
        TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
    };

    let mut encoder = TiffEncoder::new(Cursor::new(buffer))
        .map_err(encode_error)?
        .with_compression(compression);

    match config.predictor {
        Some(2) if integer_samples => encoder = encoder.with_predictor(Predictor::Horizontal),
        Some(2) => warn!("Horizontal predictor only applies to integer samples; writing without it"),
        _ => {}
    }

    let mut image = encoder.new_image::<C>(width, height).map_err(encode_error)?;

    if let Some(metadata) = metadata {
        let tag = Tag::from_u16_exhaustive;
        let directory = image.encoder();
        if let Some(values) = &metadata.pixel_scale {
            directory.write_tag(tag(geo_tags::MODEL_PIXEL_SCALE), &values[..]).map_err(encode_error)?;
        }
        if let Some(values) = &metadata.tiepoints {
            directory.write_tag(tag(geo_tags::MODEL_TIEPOINT), &values[..]).map_err(encode_error)?;
        }
        if let Some(values) = &metadata.transformation {
            directory.write_tag(tag(geo_tags::MODEL_TRANSFORMATION), &values[..]).map_err(encode_error)?;
        }
        if let Some(keys) = &metadata.geo_key_directory {
            directory.write_tag(tag(geo_tags::GEO_KEY_DIRECTORY), &keys[..]).map_err(encode_error)?;
        }
        if let Some(values) = &metadata.geo_double_params {
            directory.write_tag(tag(geo_tags::GEO_DOUBLE_PARAMS), &values[..]).map_err(encode_error)?;
        }
        if let Some(text) = &metadata.geo_ascii_params {
            directory.write_tag(tag(geo_tags::GEO_ASCII_PARAMS), text.as_str()).map_err(encode_error)?;
        }
        if let Some(text) = &metadata.nodata {
            directory.write_tag(tag(geo_tags::GDAL_NODATA), text.as_str()).map_err(encode_error)?;
        }
    }

    image.write_data(data).map_err(encode_error)?;
    Ok(())
}

/// Interleaves three planes into `[R, G, B, R, G, B, ...]`.
fn interleave<T: Copy>(red: &[T], green: &[T], blue: &[T]) -> Vec<T> {
    let mut data = Vec::with_capacity(red.len() * 3);
    for ((&r, &g), &b) in red.iter().zip(green).zip(blue) {
        data.extend_from_slice(&[r, g, b]);
    }
    data
}

fn encode_error(e: tiff::TiffError) -> ConversionError {
    ConversionError::EncodeError(e.to_string())
}
