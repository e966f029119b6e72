//! HSV conversion for packed colors.
//!
//! Conversions round the way the picker's platform does: every channel is
//! computed in floating point and rounded half-up to a byte.

use crate::color::Color;

/// Hue, saturation and value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees (0-360)
    pub hue: f32,
    /// Saturation (0.0-1.0)
    pub saturation: f32,
    /// Value/brightness (0.0-1.0)
    pub value: f32,
}

impl Hsv {
    pub fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Clamp into the ranges [`color_from_hsv`] accepts.
    ///
    /// Hue is not wrapped: anything at or past 360 becomes 359 and anything
    /// below 0 becomes 0. NaN counts as 0.
    pub fn clamped(self) -> Self {
        let hue = if self.hue >= 360.0 {
            359.0
        } else if self.hue >= 0.0 {
            self.hue
        } else {
            0.0
        };
        Self {
            hue,
            saturation: unit_clamp(self.saturation),
            value: unit_clamp(self.value),
        }
    }

    /// Convert to an opaque color.
    pub fn to_color(self) -> Color {
        color_from_hsv(self.hue, self.saturation, self.value)
    }
}

fn unit_clamp(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Round half-up, matching the platform's float-to-int rounding.
pub(crate) fn round_half_up(x: f32) -> i32 {
    (x + 0.5).floor() as i32
}

/// Convert a color to HSV. Alpha is ignored.
pub fn hsv_of(color: Color) -> Hsv {
    let r = i32::from(color.red());
    let g = i32::from(color.green());
    let b = i32::from(color.blue());

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let value = max as f32 / 255.0;
    let delta = (max - min) as f32;

    if max == min {
        return Hsv::new(0.0, 0.0, value);
    }

    let saturation = delta / max as f32;
    let mut hue = if r == max {
        (g - b) as f32 / delta
    } else if g == max {
        2.0 + (b - r) as f32 / delta
    } else {
        4.0 + (r - g) as f32 / delta
    };
    hue *= 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }

    Hsv::new(hue, saturation, value)
}

/// The hue of `color` in degrees.
pub fn hue_of(color: Color) -> f32 {
    hsv_of(color).hue
}

/// Build an opaque color from HSV, clamping the inputs first.
///
/// # Arguments
/// * `hue` - Hue in degrees; values at or past 360 behave like 359
/// * `saturation` - Saturation, clamped to 0.0-1.0
/// * `value` - Value/brightness, clamped to 0.0-1.0
pub fn color_from_hsv(hue: f32, saturation: f32, value: f32) -> Color {
    let Hsv {
        hue,
        saturation,
        value,
    } = Hsv::new(hue, saturation, value).clamped();

    let v = round_half_up(value * 255.0);
    if saturation <= 0.0 {
        return Color::argb(255, v, v, v);
    }

    let sector = hue / 60.0;
    let w = sector.floor();
    let f = sector - w;

    let p = round_half_up((1.0 - saturation) * value * 255.0);
    let q = round_half_up((1.0 - saturation * f) * value * 255.0);
    let t = round_half_up((1.0 - saturation * (1.0 - f)) * value * 255.0);

    let (r, g, b) = match w as i32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Color::argb(255, r, g, b)
}
