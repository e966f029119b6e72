//! Color picker interaction model
//!
//! The picker is laid out around a center point:
//! - A hue ring of outer radius `center` and width `ring_thickness`
//! - A saturation/value square inside the ring, `center` wide
//! - A confirm button below the ring, as wide as the square
//!
//! [`PickerSession`] turns pointer events on that layout into a selected
//! color. Drawing is left to the caller; every event reports whether the
//! picker needs a redraw. [`PickerDialog`] wraps a session that closes after
//! the first confirmation.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::gradient::{angle_to_hue_unit, interpolate, position_to_saturation_value, HUE_RING};
use crate::hsv::{color_from_hsv, hue_of};

/// Picker dimensions, in the caller's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerGeometry {
    /// Distance from the view's top-left corner to the ring center, on both axes.
    /// Also the ring's outer radius.
    pub center: f32,
    /// Width of the hue ring
    pub ring_thickness: f32,
    /// Top edge of the confirm button, relative to the center
    pub confirm_top: f32,
    /// Bottom edge of the confirm button, relative to the center
    pub confirm_bottom: f32,
}

impl Default for PickerGeometry {
    fn default() -> Self {
        Self {
            center: 100.0,
            ring_thickness: 24.0,
            confirm_top: 120.0,
            confirm_bottom: 150.0,
        }
    }
}

/// The part of the picker under a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerRegion {
    Ring,
    SaturationValue,
    Confirm,
    Outside,
}

impl PickerGeometry {
    /// Half the side of the saturation/value square (and half the confirm width).
    pub fn square_half(&self) -> f32 {
        self.center / 2.0
    }

    /// Preferred view size as `(width, height)`.
    pub fn size(&self) -> (f32, f32) {
        (self.center * 2.0, self.center * 2.8)
    }

    /// Classify a point given in view coordinates.
    pub fn region_at(&self, x: f32, y: f32) -> PickerRegion {
        let (dx, dy) = (x - self.center, y - self.center);
        let r = dx.hypot(dy);
        let half = self.square_half();
        let in_columns = dx >= -half && dx < half;

        if r <= self.center {
            if r > self.center - self.ring_thickness {
                PickerRegion::Ring
            } else if in_columns && dy >= -half && dy < half {
                PickerRegion::SaturationValue
            } else {
                PickerRegion::Outside
            }
        } else if in_columns && dy >= self.confirm_top && dy < self.confirm_bottom {
            PickerRegion::Confirm
        } else {
            PickerRegion::Outside
        }
    }
}

/// Pointer event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Move,
    Up,
}

/// A pointer event in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            action: PointerAction::Down,
            x,
            y,
        }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            action: PointerAction::Move,
            x,
            y,
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self {
            action: PointerAction::Up,
            x,
            y,
        }
    }
}

/// What a pointer event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickerResponse {
    /// Something visible changed
    pub redraw: bool,
    /// The user released on the confirm button; carries the chosen color
    pub confirmed: Option<Color>,
}

impl PickerResponse {
    fn redraw() -> Self {
        Self {
            redraw: true,
            confirmed: None,
        }
    }
}

/// Pointer-driven state of one picker.
#[derive(Debug, Clone)]
pub struct PickerSession {
    geometry: PickerGeometry,
    color: Color,
    hue: f32,
    /// The press started on the confirm button
    tracking_confirm: bool,
    /// The pointer is over the confirm button while tracking it
    highlight_confirm: bool,
}

impl PickerSession {
    /// Start a session on `initial`.
    ///
    /// A fully transparent black initial color means "unset" and becomes
    /// opaque black.
    pub fn new(geometry: PickerGeometry, initial: Color) -> Self {
        let color = if initial == Color::TRANSPARENT {
            Color::BLACK
        } else {
            initial
        };
        Self {
            geometry,
            color,
            hue: hue_of(color),
            tracking_confirm: false,
            highlight_confirm: false,
        }
    }

    pub fn geometry(&self) -> &PickerGeometry {
        &self.geometry
    }

    /// The currently selected color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The hue the saturation/value square is drawn at.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Replace the selected color. The square follows its hue.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.hue = hue_of(color);
    }

    pub fn is_tracking_confirm(&self) -> bool {
        self.tracking_confirm
    }

    pub fn is_confirm_highlighted(&self) -> bool {
        self.highlight_confirm
    }

    /// Feed one pointer event.
    pub fn handle(&mut self, event: PointerEvent) -> PickerResponse {
        let region = self.geometry.region_at(event.x, event.y);
        let in_confirm = region == PickerRegion::Confirm;

        match event.action {
            PointerAction::Down => {
                self.tracking_confirm = in_confirm;
                if in_confirm {
                    self.highlight_confirm = true;
                    return PickerResponse::redraw();
                }
                self.drag(region, event.x, event.y)
            }
            PointerAction::Move => self.drag(region, event.x, event.y),
            PointerAction::Up => {
                if !self.tracking_confirm {
                    return PickerResponse::default();
                }
                self.tracking_confirm = false;
                let confirmed = in_confirm.then_some(self.color);
                if let Some(color) = confirmed {
                    log::debug!("picker: confirmed {}", color);
                }
                PickerResponse {
                    redraw: true,
                    confirmed,
                }
            }
        }
    }

    fn drag(&mut self, region: PickerRegion, x: f32, y: f32) -> PickerResponse {
        if self.tracking_confirm {
            let in_confirm = region == PickerRegion::Confirm;
            if self.highlight_confirm == in_confirm {
                return PickerResponse::default();
            }
            self.highlight_confirm = in_confirm;
            return PickerResponse::redraw();
        }

        let (dx, dy) = (x - self.geometry.center, y - self.geometry.center);
        match region {
            PickerRegion::Ring => {
                let unit = angle_to_hue_unit(dy.atan2(dx));
                self.color = interpolate(&HUE_RING, unit);
                self.hue = hue_of(self.color);
                log::trace!("picker: hue {:.1} ({})", self.hue, self.color);
                PickerResponse::redraw()
            }
            PickerRegion::SaturationValue => {
                let half = self.geometry.square_half();
                let (saturation, value) =
                    position_to_saturation_value(dx + half, dy + half, self.geometry.center);
                self.color = color_from_hsv(self.hue, saturation, value);
                log::trace!("picker: s {:.2} v {:.2} ({})", saturation, value, self.color);
                PickerResponse::redraw()
            }
            PickerRegion::Confirm | PickerRegion::Outside => PickerResponse::default(),
        }
    }
}

/// A picker shown as a one-shot dialog.
///
/// The first confirmation closes the dialog; events after that are ignored.
#[derive(Debug, Clone)]
pub struct PickerDialog {
    session: PickerSession,
    title: String,
    open: bool,
}

impl PickerDialog {
    pub const DEFAULT_TITLE: &'static str = "- Color -";

    /// Open a dialog on `initial`.
    pub fn new(geometry: PickerGeometry, initial: Color) -> Self {
        Self {
            session: PickerSession::new(geometry, initial),
            title: Self::DEFAULT_TITLE.to_string(),
            open: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn session(&self) -> &PickerSession {
        &self.session
    }

    /// Forward a pointer event to the picker while the dialog is open.
    pub fn handle(&mut self, event: PointerEvent) -> PickerResponse {
        if !self.open {
            return PickerResponse::default();
        }
        let response = self.session.handle(event);
        if let Some(color) = response.confirmed {
            log::debug!("picker dialog: confirmed {}, dismissing", color);
            self.open = false;
        }
        response
    }

    /// Close without confirming.
    pub fn dismiss(&mut self) {
        self.open = false;
    }
}
