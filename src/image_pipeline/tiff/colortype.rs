//! RGB color types with signed integer samples.
//!
//! The `tiff` encoder ships signed gray types only; these fill the gap for
//! stacking signed bands such as elevation models.

use tiff::encoder::colortype::ColorType;
use tiff::tags::{PhotometricInterpretation, SampleFormat};

macro_rules! signed_rgb {
    ($name:ident, $inner:ty, $bits:expr) => {
        pub struct $name;

        impl ColorType for $name {
            type Inner = $inner;
            const TIFF_VALUE: PhotometricInterpretation = PhotometricInterpretation::RGB;
            const BITS_PER_SAMPLE: &'static [u16] = &[$bits, $bits, $bits];
            const SAMPLE_FORMAT: &'static [SampleFormat] =
                &[SampleFormat::Int, SampleFormat::Int, SampleFormat::Int];

            fn horizontal_predict(row: &[Self::Inner], result: &mut Vec<Self::Inner>) {
                let samples = Self::SAMPLE_FORMAT.len();
                if row.len() < samples {
                    return;
                }
                result.extend_from_slice(&row[..samples]);
                result.extend(
                    row[samples..]
                        .iter()
                        .zip(row)
                        .map(|(current, previous)| current.wrapping_sub(*previous)),
                );
            }
        }
    };
}

signed_rgb!(RGBI8, i8, 8);
signed_rgb!(RGBI16, i16, 16);
signed_rgb!(RGBI32, i32, 32);
signed_rgb!(RGBI64, i64, 64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_predict_differences_same_channel() {
        let row: [i16; 6] = [10, -20, 30, 15, -25, 30];
        let mut result = Vec::new();
        RGBI16::horizontal_predict(&row, &mut result);
        assert_eq!(result, vec![10, -20, 30, 5, -5, 0]);
    }
}
