//! Packed ARGB color values.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A color packed as `0xAARRGGBB`.
///
/// Every channel is a byte, so a `Color` can never hold out-of-range
/// components. Use [`Color::argb`] to build one from unchecked integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const GRAY: Color = Color(0xFF88_8888);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);
    pub const YELLOW: Color = Color(0xFFFF_FF00);
    pub const CYAN: Color = Color(0xFF00_FFFF);
    pub const MAGENTA: Color = Color(0xFFFF_00FF);

    /// Wrap a packed `0xAARRGGBB` value.
    pub const fn from_packed(packed: u32) -> Self {
        Self(packed)
    }

    /// Build a color from channels, clamping each to `0..=255`.
    pub fn argb(alpha: i32, red: i32, green: i32, blue: i32) -> Self {
        let pin = |c: i32| c.clamp(0, 255) as u32;
        Self(pin(alpha) << 24 | pin(red) << 16 | pin(green) << 8 | pin(blue))
    }

    /// Build a fully opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(0xFF00_0000 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    pub const fn packed(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | (alpha as u32) << 24)
    }

    /// Channels as `[r, g, b]`, the form widgets usually store.
    pub const fn to_rgb_array(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Errors from parsing a color literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Literal is neither 6 (`RRGGBB`) nor 8 (`AARRGGBB`) hex digits long
    #[error("Invalid color length {len}: expected #RRGGBB or #AARRGGBB")]
    InvalidLength {
        /// Number of digits found after the optional `#`
        len: usize,
    },

    /// Literal contains a non-hex character
    #[error("Invalid hex digits in color '{literal}'")]
    InvalidHex {
        /// The literal as given
        literal: String,
    },
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse `#AARRGGBB` or `#RRGGBB` (opaque). The `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        // from_str_radix alone would accept a leading '+'
        let invalid = || ColorParseError::InvalidHex {
            literal: s.to_string(),
        };
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let alpha = match digits.len() {
            8 => 0,
            6 => 0xFF00_0000,
            len => return Err(ColorParseError::InvalidLength { len }),
        };
        let value = u32::from_str_radix(digits, 16).map_err(|_: ParseIntError| invalid())?;
        Ok(Color(alpha | value))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_clamps() {
        let c = Color::argb(300, -5, 128, 255);
        assert_eq!(c.alpha(), 255);
        assert_eq!(c.red(), 0);
        assert_eq!(c.green(), 128);
        assert_eq!(c.blue(), 255);
    }

    #[test]
    fn test_channels() {
        let c = Color::from_packed(0x8011_2233);
        assert_eq!(c.alpha(), 0x80);
        assert_eq!(c.red(), 0x11);
        assert_eq!(c.green(), 0x22);
        assert_eq!(c.blue(), 0x33);
        assert_eq!(c.to_rgb_array(), [0x11, 0x22, 0x33]);
        assert_eq!(c.with_alpha(0xFF).packed(), 0xFF11_2233);
    }

    #[test]
    fn test_rgb_is_opaque() {
        assert_eq!(Color::rgb(255, 0, 0), Color::RED);
        assert_eq!(Color::from([0, 0, 255]), Color::BLUE);
    }

    #[test]
    fn test_parse_literals() {
        assert_eq!("#FF00FF00".parse::<Color>(), Ok(Color::GREEN));
        assert_eq!("00ff00".parse::<Color>(), Ok(Color::GREEN));
        assert_eq!("#80000000".parse::<Color>().map(Color::alpha), Ok(0x80));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "#FFF".parse::<Color>(),
            Err(ColorParseError::InvalidLength { len: 3 })
        );
        assert!(matches!(
            "#GG0000".parse::<Color>(),
            Err(ColorParseError::InvalidHex { .. })
        ));
        assert!(matches!(
            "+FF0000".parse::<Color>(),
            Err(ColorParseError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_parse_allows_single_hash_only() {
        assert!(matches!(
            "##FF0000".parse::<Color>(),
            Err(ColorParseError::InvalidHex { .. })
        ));
        assert!(matches!(
            "##FFFF0000".parse::<Color>(),
            Err(ColorParseError::InvalidHex { .. })
        ));
        assert_eq!(" #FF0000 ".parse::<Color>(), Ok(Color::RED));
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::MAGENTA.to_string(), "#FFFF00FF");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::CYAN).unwrap();
        assert_eq!(json, "\"#FF00FFFF\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::CYAN);
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
