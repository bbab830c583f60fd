//! Hex color file loading.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::hex::color::{Color, decode_hex_color};

/// A token that could not be decoded and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFailure {
    /// 1-based line number
    pub line: usize,
    pub token: String,
    pub reason: String,
}

/// Decoded colors in file order, plus every token that was skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedColors {
    pub colors: Vec<Color>,
    pub failures: Vec<TokenFailure>,
}

impl LoadedColors {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

pub trait HexColorReader {
    fn read_colors(&self, path: &Path) -> Result<LoadedColors>;
}

/// Reads whitespace-separated hex color tokens from a text file.
pub struct HexFileLoader;

impl HexColorReader for HexFileLoader {
    fn read_colors(&self, path: &Path) -> Result<LoadedColors> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConversionError::InputNotFound(path.to_path_buf()),
            _ => ConversionError::InputReadError(format!("{}: {}", path.display(), e)),
        })?;

        let loaded = parse_hex_text(&text);
        debug!(
            "Loaded {} colors from {} ({} tokens skipped)",
            loaded.colors.len(),
            path.display(),
            loaded.failures.len()
        );
        Ok(loaded)
    }
}

/// Decodes every token of `text`, line by line, left to right.
///
/// Blank lines are skipped. Undecodable tokens are logged and recorded in
/// [`LoadedColors::failures`]; decoding carries on with the next token.
pub fn parse_hex_text(text: &str) -> LoadedColors {
    let mut loaded = LoadedColors::default();

    for (index, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            match decode_hex_color(token) {
                Ok(color) => loaded.colors.push(color),
                Err(e) => {
                    warn!(line = index + 1, token, "Skipping invalid hex value: {}", e);
                    loaded.failures.push(TokenFailure {
                        line: index + 1,
                        token: token.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    loaded
}
