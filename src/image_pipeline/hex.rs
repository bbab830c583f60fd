//! Hex color decoding module
//!
//! Turns text files of 12-bit packed colors into block-scaled RGB images.

mod color;
mod loader;
mod grid;
mod writer;
mod standard_image_writer;
pub mod types;

pub use color::{Color, HexDecodeError, decode_hex_color};
pub use loader::{HexColorReader, HexFileLoader, LoadedColors, TokenFailure, parse_hex_text};
pub use grid::{LogicalGrid, assemble_image};
pub use writer::RgbImageWriter;
pub use standard_image_writer::StandardImageWriter;
pub use types::{HexImageConfig, HexImageConfigBuilder};
