//! Band reader backed by the `tiff` crate.
//!
//! Reads the first band of a TIFF/GeoTIFF file together with the GeoTIFF tags
//! needed to georeference a derived raster.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek};
use std::path::Path;

use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::tags::Tag;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raster::reader::BandReader;
use crate::image_pipeline::raster::types::{BandRaster, BandSamples, GeoMetadata, geo_tags};

/// Reads band 1 of any TIFF the `tiff` crate can decode.
///
/// Multi-sample files (RGB, gray+alpha, ...) are accepted; only the first
/// sample of each pixel is kept, or the first plane when samples are stored
/// planar.
pub struct TiffBandReader;

impl BandReader for TiffBandReader {
    fn read_band(&self, path: &Path) -> Result<BandRaster> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConversionError::InputNotFound(path.to_path_buf()),
            _ => ConversionError::InputReadError(format!("{}: {}", path.display(), e)),
        })?;

        debug!("Decoding band 1 of {}", path.display());
        let band = read_first_band(BufReader::new(file))
            .map_err(|e| annotate_with_path(e, path))?;
        debug!(
            "Decoded band: {}x{} {} samples, georeferenced: {}",
            band.width,
            band.height,
            band.samples.type_name(),
            !band.metadata.is_empty()
        );
        Ok(band)
    }
}

/// Decodes the first band from an in-memory or on-disk TIFF stream.
pub fn read_first_band<R: Read + Seek>(reader: R) -> Result<BandRaster> {
    let mut decoder = Decoder::new(reader).map_err(decode_error)?;

    let (width, height) = decoder.dimensions().map_err(decode_error)?;
    let (width, height) = (width as usize, height as usize);

    let samples_per_pixel = match decoder.colortype().map_err(decode_error)? {
        ColorType::Gray(_) | ColorType::Palette(_) => 1,
        ColorType::GrayA(_) => 2,
        ColorType::RGB(_) | ColorType::YCbCr(_) => 3,
        ColorType::RGBA(_) | ColorType::CMYK(_) => 4,
        other => {
            return Err(ConversionError::UnsupportedFormat(format!(
                "TIFF color type {other:?}"
            )));
        }
    };

    // Separate planes: the decoder hands back only the first plane, which
    // already is band 1.
    let planar = decoder
        .find_tag(Tag::PlanarConfiguration)
        .map_err(decode_error)?
        .map(|v| v.into_u16())
        .transpose()
        .map_err(decode_error)?
        == Some(PLANAR_CONFIGURATION_PLANAR);
    let layout = SampleLayout {
        samples_per_pixel,
        planar,
        pixel_count: width * height,
    };

    let metadata = read_geo_metadata(&mut decoder)?;

    let samples = match decoder.read_image().map_err(decode_error)? {
        DecodingResult::U8(data) => BandSamples::U8(layout.first_band(data)),
        DecodingResult::U16(data) => BandSamples::U16(layout.first_band(data)),
        DecodingResult::U32(data) => BandSamples::U32(layout.first_band(data)),
        DecodingResult::U64(data) => BandSamples::U64(layout.first_band(data)),
        DecodingResult::I8(data) => BandSamples::I8(layout.first_band(data)),
        DecodingResult::I16(data) => BandSamples::I16(layout.first_band(data)),
        DecodingResult::I32(data) => BandSamples::I32(layout.first_band(data)),
        DecodingResult::I64(data) => BandSamples::I64(layout.first_band(data)),
        DecodingResult::F32(data) => BandSamples::F32(layout.first_band(data)),
        DecodingResult::F64(data) => BandSamples::F64(layout.first_band(data)),
        _ => {
            return Err(ConversionError::UnsupportedFormat(
                "sample type has no RGB TIFF counterpart (half-precision float?)".to_string(),
            ));
        }
    };

    if samples.len() != width * height {
        return Err(ConversionError::DecodeError(format!(
            "expected {} samples for a {}x{} band, decoded {}",
            width * height,
            width,
            height,
            samples.len()
        )));
    }

    Ok(BandRaster {
        width,
        height,
        samples,
        metadata,
    })
}

fn read_geo_metadata<R: Read + Seek>(decoder: &mut Decoder<R>) -> Result<GeoMetadata> {
    let mut find = |code: u16| {
        decoder
            .find_tag(Tag::from_u16_exhaustive(code))
            .map_err(decode_error)
    };

    Ok(GeoMetadata {
        pixel_scale: find(geo_tags::MODEL_PIXEL_SCALE)?
            .map(|v| v.into_f64_vec())
            .transpose()
            .map_err(decode_error)?,
        tiepoints: find(geo_tags::MODEL_TIEPOINT)?
            .map(|v| v.into_f64_vec())
            .transpose()
            .map_err(decode_error)?,
        transformation: find(geo_tags::MODEL_TRANSFORMATION)?
            .map(|v| v.into_f64_vec())
            .transpose()
            .map_err(decode_error)?,
        geo_key_directory: find(geo_tags::GEO_KEY_DIRECTORY)?
            .map(|v| v.into_u16_vec())
            .transpose()
            .map_err(decode_error)?,
        geo_double_params: find(geo_tags::GEO_DOUBLE_PARAMS)?
            .map(|v| v.into_f64_vec())
            .transpose()
            .map_err(decode_error)?,
        geo_ascii_params: find(geo_tags::GEO_ASCII_PARAMS)?
            .map(|v| v.into_string())
            .transpose()
            .map_err(decode_error)?,
        nodata: find(geo_tags::GDAL_NODATA)?
            .map(|v| v.into_string())
            .transpose()
            .map_err(decode_error)?,
    })
}

/// PlanarConfiguration value for one plane per sample
const PLANAR_CONFIGURATION_PLANAR: u16 = 2;

/// How band 1 sits inside the decoded sample buffer.
struct SampleLayout {
    samples_per_pixel: usize,
    planar: bool,
    pixel_count: usize,
}

impl SampleLayout {
    fn first_band<T: Copy>(&self, mut data: Vec<T>) -> Vec<T> {
        if self.planar {
            data.truncate(self.pixel_count);
            return data;
        }
        if self.samples_per_pixel == 1 {
            return data;
        }
        data.into_iter().step_by(self.samples_per_pixel).collect()
    }
}

fn decode_error(e: tiff::TiffError) -> ConversionError {
    match e {
        tiff::TiffError::IoError(io) => ConversionError::InputReadError(io.to_string()),
        other => ConversionError::DecodeError(other.to_string()),
    }
}

fn annotate_with_path(e: ConversionError, path: &Path) -> ConversionError {
    match e {
        ConversionError::InputReadError(msg) => {
            ConversionError::InputReadError(format!("{}: {}", path.display(), msg))
        }
        ConversionError::DecodeError(msg) => {
            ConversionError::DecodeError(format!("{}: {}", path.display(), msg))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tiff::encoder::{TiffEncoder, colortype};

    use super::*;

    fn encode_gray8(width: u32, height: u32, data: &[u8]) -> Vec<u8> {
        let mut buffer = Vec::new();
        TiffEncoder::new(Cursor::new(&mut buffer))
            .unwrap()
            .write_image::<colortype::Gray8>(width, height, data)
            .unwrap();
        buffer
    }

    #[test]
    fn test_reads_gray_band() {
        let data: Vec<u8> = (0..12).collect();
        let band = read_first_band(Cursor::new(encode_gray8(4, 3, &data))).unwrap();

        assert_eq!(band.shape(), (3, 4));
        assert_eq!(band.samples, BandSamples::U8(data));
        assert!(band.metadata.is_empty());
    }

    #[test]
    fn test_takes_first_sample_of_rgb_input() {
        let mut buffer = Vec::new();
        let data: Vec<u16> = vec![1, 2, 3, 4, 5, 6];
        TiffEncoder::new(Cursor::new(&mut buffer))
            .unwrap()
            .write_image::<colortype::RGB16>(2, 1, &data)
            .unwrap();

        let band = read_first_band(Cursor::new(buffer)).unwrap();
        assert_eq!(band.samples, BandSamples::U16(vec![1, 4]));
    }

    #[test]
    fn test_reads_geo_tags() {
        let mut buffer = Vec::new();
        {
            let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer)).unwrap();
            let mut image = encoder.new_image::<colortype::Gray8>(2, 2).unwrap();
            image
                .encoder()
                .write_tag(
                    Tag::from_u16_exhaustive(geo_tags::MODEL_PIXEL_SCALE),
                    &[30.0f64, 30.0, 0.0][..],
                )
                .unwrap();
            image
                .encoder()
                .write_tag(Tag::from_u16_exhaustive(geo_tags::GDAL_NODATA), "0")
                .unwrap();
            image.write_data(&[0u8, 1, 2, 3]).unwrap();
        }

        let band = read_first_band(Cursor::new(buffer)).unwrap();
        assert_eq!(band.metadata.pixel_scale, Some(vec![30.0, 30.0, 0.0]));
        assert_eq!(band.metadata.nodata.as_deref(), Some("0"));
        assert_eq!(band.metadata.tiepoints, None);
    }

    #[test]
    fn test_missing_file_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("red.tif");

        let err = TiffBandReader.read_band(&missing).unwrap_err();
        assert!(matches!(err, ConversionError::InputNotFound(p) if p == missing));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = read_first_band(Cursor::new(b"not a tiff at all".to_vec())).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::DecodeError(_) | ConversionError::InputReadError(_)
        ));
    }

    /// Little-endian, uncompressed 8-bit RGB TIFF stored one plane per
    /// sample, each plane in its own strip. The encoder only writes chunky
    /// layouts, so the file is laid out by hand.
    fn planar_rgb8(width: u16, height: u16, planes: [&[u8]; 3]) -> Vec<u8> {
        const SHORT: u16 = 3;
        const LONG: u16 = 4;
        let plane_len = width as u32 * height as u32;

        let entry_count = 10u16;
        let ifd_offset = 8u32;
        let bits_offset = ifd_offset + 2 + entry_count as u32 * 12 + 4;
        let offsets_offset = bits_offset + 6;
        let counts_offset = offsets_offset + 12;
        let data_offset = counts_offset + 12;

        let mut out = Vec::new();
        out.extend_from_slice(b"II");
        out.extend_from_slice(&42u16.to_le_bytes());
        out.extend_from_slice(&ifd_offset.to_le_bytes());

        let mut ifd = Vec::new();
        ifd.extend_from_slice(&entry_count.to_le_bytes());
        for (tag, kind, count, value) in [
            (256u16, SHORT, 1u32, width as u32),
            (257, SHORT, 1, height as u32),
            (258, SHORT, 3, bits_offset),
            (259, SHORT, 1, 1),
            (262, SHORT, 1, 2),
            (273, LONG, 3, offsets_offset),
            (277, SHORT, 1, 3),
            (278, SHORT, 1, height as u32),
            (279, LONG, 3, counts_offset),
            (284, SHORT, 1, 2),
        ] {
            ifd.extend_from_slice(&tag.to_le_bytes());
            ifd.extend_from_slice(&kind.to_le_bytes());
            ifd.extend_from_slice(&count.to_le_bytes());
            ifd.extend_from_slice(&value.to_le_bytes());
        }
        ifd.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&ifd);

        for _ in 0..3 {
            out.extend_from_slice(&8u16.to_le_bytes());
        }
        for plane in 0..3 {
            out.extend_from_slice(&(data_offset + plane * plane_len).to_le_bytes());
        }
        for _ in 0..3 {
            out.extend_from_slice(&plane_len.to_le_bytes());
        }
        for plane in planes {
            out.extend_from_slice(plane);
        }
        out
    }

    #[test]
    fn test_planar_rgb_input_yields_first_plane() {
        let red: Vec<u8> = (0..16).collect();
        let green = vec![100u8; 16];
        let blue = vec![200u8; 16];
        let file = planar_rgb8(4, 4, [red.as_slice(), green.as_slice(), blue.as_slice()]);

        let band = read_first_band(Cursor::new(file)).unwrap();
        assert_eq!(band.shape(), (4, 4));
        assert_eq!(band.samples, BandSamples::U8(red));
    }

    #[test]
    fn test_reads_signed_band() {
        let mut buffer = Vec::new();
        let data: Vec<i16> = vec![-500, -1, 0, 1200];
        TiffEncoder::new(Cursor::new(&mut buffer))
            .unwrap()
            .write_image::<colortype::GrayI16>(2, 2, &data)
            .unwrap();

        let band = read_first_band(Cursor::new(buffer)).unwrap();
        assert_eq!(band.samples, BandSamples::I16(data));
        assert_eq!(band.samples.type_name(), "i16");
    }
}
