//! Pipeline conversions module
//!
//! Orchestrates the band-stacking and hex-to-image conversions.

mod band_stack;
mod hex_to_image;


pub use band_stack::{BandPaths, BandStackPipeline};
pub use hex_to_image::{HexConversionSummary, HexToImagePipeline};
