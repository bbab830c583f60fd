//! 12-bit packed color decoding.

use thiserror::Error;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Expands a packed `0xRGB` value, one nibble per channel.
    ///
    /// Bits above the low 12 are ignored. Each nibble is scaled by 17 so that
    /// `0x0` maps to 0 and `0xF` to 255.
    pub const fn from_rgb12(value: u16) -> Self {
        let r4 = ((value >> 8) & 0x0F) as u8;
        let g4 = ((value >> 4) & 0x0F) as u8;
        let b4 = (value & 0x0F) as u8;
        Self {
            r: r4 * 17,
            g: g4 * 17,
            b: b4 * 17,
        }
    }

    pub fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        color.to_rgb()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexDecodeError {
    #[error("no hex digits")]
    Empty,

    #[error("invalid hex digit '{0}'")]
    InvalidDigit(char),
}

/// Decodes one token such as `0xF00`, `0FF` or `0x00000111`.
///
/// A leading `0x` is stripped first. What remains follows the usual base-16
/// integer literal grammar: an optional `+`/`-` sign, an optional `0x`/`0X`
/// prefix, then hex digits with single `_` separators between them (one `_`
/// may also follow the prefix). Tokens of any length are accepted since only
/// the low 12 bits carry color; negative values contribute the low 12 bits of
/// their two's complement.
pub fn decode_hex_color(token: &str) -> Result<Color, HexDecodeError> {
    let rest = token.strip_prefix("0x").unwrap_or(token);

    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'+') => (false, &rest[1..]),
        Some(b'-') => (true, &rest[1..]),
        _ => (false, rest),
    };

    let (prefixed, rest) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(stripped) => (true, stripped),
        None => (false, rest),
    };

    let rest = match rest.strip_prefix('_') {
        Some(stripped) if prefixed => stripped,
        _ => rest,
    };

    if rest.is_empty() {
        return Err(HexDecodeError::Empty);
    }

    // Only the last three digits matter; keep a running window of them.
    let mut low: u16 = 0;
    for group in rest.split('_') {
        if group.is_empty() {
            return Err(HexDecodeError::InvalidDigit('_'));
        }
        for c in group.chars() {
            let digit = c.to_digit(16).ok_or(HexDecodeError::InvalidDigit(c))?;
            low = ((low << 4) | digit as u16) & 0x0FFF;
        }
    }

    if negative {
        low = (0x1000 - low) & 0x0FFF;
    }
    Ok(Color::from_rgb12(low))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(decode_hex_color("0xF00"), Ok(Color::new(255, 0, 0)));
        assert_eq!(decode_hex_color("0x0F0"), Ok(Color::new(0, 255, 0)));
        assert_eq!(decode_hex_color("0x00F"), Ok(Color::new(0, 0, 255)));
    }

    #[test]
    fn test_prefix_is_optional() {
        assert_eq!(decode_hex_color("0FF"), Ok(Color::new(0, 255, 255)));
        assert_eq!(decode_hex_color("000"), Ok(Color::BLACK));
        assert_eq!(decode_hex_color("0XfFf"), Ok(Color::new(255, 255, 255)));
    }

    #[test]
    fn test_nibbles_scale_by_17() {
        assert_eq!(decode_hex_color("0x888"), Ok(Color::new(136, 136, 136)));
        assert_eq!(decode_hex_color("0x123"), Ok(Color::new(17, 34, 51)));
    }

    #[test]
    fn test_only_low_twelve_bits_count() {
        assert_eq!(decode_hex_color("0x00000111"), Ok(Color::new(17, 17, 17)));
        assert_eq!(decode_hex_color("0xABCDEF0121"), Ok(Color::new(17, 34, 17)));
        assert_eq!(decode_hex_color("0xF"), Ok(Color::new(0, 0, 255)));
    }

    #[test]
    fn test_invalid_tokens() {
        assert_eq!(decode_hex_color("zzz"), Err(HexDecodeError::InvalidDigit('z')));
        assert_eq!(decode_hex_color("0x"), Err(HexDecodeError::Empty));
        assert_eq!(decode_hex_color(""), Err(HexDecodeError::Empty));
        assert_eq!(decode_hex_color("F__00"), Err(HexDecodeError::InvalidDigit('_')));
        assert_eq!(decode_hex_color("F00_"), Err(HexDecodeError::InvalidDigit('_')));
        assert_eq!(decode_hex_color("_F00"), Err(HexDecodeError::InvalidDigit('_')));
        assert_eq!(decode_hex_color("++F00"), Err(HexDecodeError::InvalidDigit('+')));
        assert_eq!(decode_hex_color("0x0x0x1"), Err(HexDecodeError::InvalidDigit('x')));
        assert_eq!(decode_hex_color("0x+"), Err(HexDecodeError::Empty));
    }

    #[test]
    fn test_second_prefix_is_accepted() {
        assert_eq!(decode_hex_color("0x0x1"), Ok(Color::new(0, 0, 17)));
        assert_eq!(decode_hex_color("0x0XF00"), Ok(Color::new(255, 0, 0)));
        assert_eq!(decode_hex_color("0x0x_F00"), Ok(Color::new(255, 0, 0)));
    }

    #[test]
    fn test_sign_is_accepted() {
        assert_eq!(decode_hex_color("+F00"), Ok(Color::new(255, 0, 0)));
        assert_eq!(decode_hex_color("0x+0x0F0"), Ok(Color::new(0, 255, 0)));
        assert_eq!(decode_hex_color("-1"), Ok(Color::new(255, 255, 255)));
        assert_eq!(decode_hex_color("-F00"), Ok(Color::new(17, 0, 0)));
        assert_eq!(decode_hex_color("-1000"), Ok(Color::BLACK));
    }

    #[test]
    fn test_underscore_separators() {
        assert_eq!(decode_hex_color("F_00"), Ok(Color::new(255, 0, 0)));
        assert_eq!(decode_hex_color("0xF_0_0"), Ok(Color::new(255, 0, 0)));
        assert_eq!(decode_hex_color("0x0000_0111"), Ok(Color::new(17, 17, 17)));
    }

    #[test]
    fn test_to_rgb() {
        let rgb: image::Rgb<u8> = Color::new(1, 2, 3).into();
        assert_eq!(rgb, image::Rgb([1, 2, 3]));
    }
}
