//! Interpolation along color rings and gradients.

use std::f32::consts::TAU;

use crate::color::Color;
use crate::hsv::{color_from_hsv, round_half_up};

/// Stops of the hue ring, walked counter-clockwise from angle 0.
pub const HUE_RING: [Color; 7] = [
    Color::RED,
    Color::MAGENTA,
    Color::BLUE,
    Color::CYAN,
    Color::GREEN,
    Color::YELLOW,
    Color::RED,
];

/// Stops of the neutral chroma strip.
pub const CHROMA_STRIP: [Color; 3] = [Color::BLACK, Color::GRAY, Color::WHITE];

fn mix(left: u8, right: u8, p: f32) -> i32 {
    let (left, right) = (i32::from(left), i32::from(right));
    left + round_half_up(p * (right - left) as f32)
}

/// Pick the color at `unit` along evenly spaced `colors`.
///
/// `unit <= 0` gives the first stop and `unit >= 1` the last. In between,
/// each channel (alpha included) is interpolated linearly between the two
/// surrounding stops. An empty slice gives [`Color::TRANSPARENT`]; a single
/// stop is returned as is.
pub fn interpolate(colors: &[Color], unit: f32) -> Color {
    let (first, last) = match colors {
        [] => return Color::TRANSPARENT,
        [only] => return *only,
        [first, .., last] => (*first, *last),
    };
    if unit <= 0.0 {
        return first;
    }
    if unit >= 1.0 {
        return last;
    }

    let scaled = unit * (colors.len() - 1) as f32;
    let index = (scaled as usize).min(colors.len() - 2);
    let p = scaled - index as f32;

    let left = colors[index];
    let right = colors[index + 1];
    Color::argb(
        mix(left.alpha(), right.alpha(), p),
        mix(left.red(), right.red(), p),
        mix(left.green(), right.green(), p),
        mix(left.blue(), right.blue(), p),
    )
}

/// Map a pointer angle around the ring (radians, as from `atan2`) to a
/// position in `[0, 1)` for [`interpolate`] over [`HUE_RING`].
pub fn angle_to_hue_unit(angle: f32) -> f32 {
    let unit = angle / TAU;
    if unit < 0.0 { unit + 1.0 } else { unit }
}

/// Map an offset inside the saturation/value square to `(saturation, value)`.
///
/// The result is not clamped; [`color_from_hsv`] does that.
pub fn position_to_saturation_value(dx: f32, dy: f32, half_extent: f32) -> (f32, f32) {
    (dx / half_extent, dy / half_extent)
}

/// Sample one row of the saturation/value square.
///
/// Saturation steps through `0, 1/samples, 2/samples, ...` at the given
/// hue and value.
pub fn saturation_value_row(hue: f32, value: f32, samples: usize) -> Vec<Color> {
    (0..samples)
        .map(|i| color_from_hsv(hue, i as f32 / samples as f32, value))
        .collect()
}
