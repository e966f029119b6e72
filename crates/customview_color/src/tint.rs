//! Tint filters for images.
//!
//! A tint is a color plus the Porter-Duff mode used to lay it over an image.
//! Modes are written by name (`"SRC_ATOP"`, `"multiply"`); an unknown or
//! missing name falls back to [`BlendMode::SrcAtop`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;

/// Porter-Duff compositing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BlendMode {
    Clear,
    Src,
    Dst,
    SrcOver,
    DstOver,
    SrcIn,
    DstIn,
    SrcOut,
    DstOut,
    #[default]
    SrcAtop,
    DstAtop,
    Xor,
    Darken,
    Lighten,
    Multiply,
    Screen,
    Add,
    Overlay,
}

impl BlendMode {
    /// Every mode, in declaration order.
    pub const ALL: [BlendMode; 18] = [
        BlendMode::Clear,
        BlendMode::Src,
        BlendMode::Dst,
        BlendMode::SrcOver,
        BlendMode::DstOver,
        BlendMode::SrcIn,
        BlendMode::DstIn,
        BlendMode::SrcOut,
        BlendMode::DstOut,
        BlendMode::SrcAtop,
        BlendMode::DstAtop,
        BlendMode::Xor,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Add,
        BlendMode::Overlay,
    ];

    /// Upper snake case name, as used in layout attributes.
    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Clear => "CLEAR",
            BlendMode::Src => "SRC",
            BlendMode::Dst => "DST",
            BlendMode::SrcOver => "SRC_OVER",
            BlendMode::DstOver => "DST_OVER",
            BlendMode::SrcIn => "SRC_IN",
            BlendMode::DstIn => "DST_IN",
            BlendMode::SrcOut => "SRC_OUT",
            BlendMode::DstOut => "DST_OUT",
            BlendMode::SrcAtop => "SRC_ATOP",
            BlendMode::DstAtop => "DST_ATOP",
            BlendMode::Xor => "XOR",
            BlendMode::Darken => "DARKEN",
            BlendMode::Lighten => "LIGHTEN",
            BlendMode::Multiply => "MULTIPLY",
            BlendMode::Screen => "SCREEN",
            BlendMode::Add => "ADD",
            BlendMode::Overlay => "OVERLAY",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Blend mode name that matches no mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown blend mode '{0}'")]
pub struct UnknownBlendMode(pub String);

impl FromStr for BlendMode {
    type Err = UnknownBlendMode;

    /// Case-insensitive; `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        BlendMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownBlendMode(s.to_string()))
    }
}

impl TryFrom<String> for BlendMode {
    type Error = UnknownBlendMode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BlendMode> for String {
    fn from(mode: BlendMode) -> Self {
        mode.name().to_string()
    }
}

/// A color filter laid over an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tint {
    pub color: Color,
    #[serde(default)]
    pub mode: BlendMode,
}

impl Tint {
    pub fn new(color: Color, mode: BlendMode) -> Self {
        Self { color, mode }
    }

    /// Build a tint from layout attributes.
    ///
    /// A zero color means "no tint". The mode falls back to
    /// [`BlendMode::SrcAtop`] when it is missing or unknown.
    pub fn from_attributes(color: Color, mode: Option<&str>) -> Option<Self> {
        if color == Color::TRANSPARENT {
            return None;
        }
        let mode = match mode.map(str::parse::<BlendMode>) {
            None => BlendMode::default(),
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                log::warn!("{}, using {}", e, BlendMode::default());
                BlendMode::default()
            }
        };
        Some(Self::new(color, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("SRC_ATOP".parse::<BlendMode>(), Ok(BlendMode::SrcAtop));
        assert_eq!("multiply".parse::<BlendMode>(), Ok(BlendMode::Multiply));
        assert_eq!("dst-over".parse::<BlendMode>(), Ok(BlendMode::DstOver));
        assert_eq!(
            "BURN".parse::<BlendMode>(),
            Err(UnknownBlendMode("BURN".to_string()))
        );
    }

    #[test]
    fn test_names_parse_back() {
        for mode in BlendMode::ALL {
            assert_eq!(mode.to_string().parse::<BlendMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_zero_color_is_no_tint() {
        assert_eq!(Tint::from_attributes(Color::TRANSPARENT, Some("SCREEN")), None);
    }

    #[test]
    fn test_mode_fallback() {
        let red = Color::RED;
        assert_eq!(
            Tint::from_attributes(red, None),
            Some(Tint::new(red, BlendMode::SrcAtop))
        );
        assert_eq!(
            Tint::from_attributes(red, Some("BURN")),
            Some(Tint::new(red, BlendMode::SrcAtop))
        );
        assert_eq!(
            Tint::from_attributes(red, Some("MULTIPLY")),
            Some(Tint::new(red, BlendMode::Multiply))
        );
    }

    #[test]
    fn test_serde() {
        let tint: Tint = serde_json::from_str(r##"{"color": "#80FF0000"}"##).unwrap();
        assert_eq!(tint.mode, BlendMode::SrcAtop);
        assert_eq!(tint.color.alpha(), 0x80);

        let json = serde_json::to_string(&Tint::new(Color::BLUE, BlendMode::Xor)).unwrap();
        assert_eq!(json, r##"{"color":"#FF0000FF","mode":"XOR"}"##);
    }
}
