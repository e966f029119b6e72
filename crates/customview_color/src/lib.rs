//! customview_color - HSV color math and the color picker model
//!
//! Pure functions over packed ARGB colors: HSV conversion, interpolation along
//! a hue ring, and the mapping from pointer positions to hue, saturation and
//! value. [`PickerSession`] strings them together into the picker's pointer
//! handling, and [`Tint`] describes a color filter laid over an image.

mod color;
mod gradient;
mod hsv;
mod picker;
mod tint;

pub use color::{Color, ColorParseError};
pub use gradient::{
    angle_to_hue_unit, interpolate, position_to_saturation_value, saturation_value_row,
    CHROMA_STRIP, HUE_RING,
};
pub use hsv::{color_from_hsv, hsv_of, hue_of, Hsv};
pub use picker::{
    PickerDialog, PickerGeometry, PickerRegion, PickerResponse, PickerSession, PointerAction,
    PointerEvent,
};
pub use tint::{BlendMode, Tint, UnknownBlendMode};
