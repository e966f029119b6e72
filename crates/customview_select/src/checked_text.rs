//! Text item with a check mark on either side.
//!
//! Unlike [`RadioButton`](crate::RadioButton), a tap flips the state both
//! ways. In a group the coordinator still keeps at most one item checked, so
//! tapping the checked item clears the group's items while the recorded
//! selection stays put.

use crate::handle::Handle;
use crate::selectable::Selectable;

/// Side of the text the check mark sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckMarkPosition {
    #[default]
    Left,
    Right,
}

/// Vertical placement of the check mark inside the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Padding on the four sides of an item, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Rectangle in item coordinates, right and bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Intrinsic size of the check mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckMark {
    pub width: i32,
    pub height: i32,
}

/// A checkable line of text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckedText {
    handle: Option<Handle>,
    text: String,
    checked: bool,
    position: CheckMarkPosition,
    mark: Option<CheckMark>,
    /// Gap between the mark and the text
    drawable_padding: i32,
    padding: Padding,
}

impl CheckedText {
    /// Create an unchecked item with no check mark.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the handle up front
    pub fn with_handle(mut self, id: u32) -> Self {
        self.handle = Some(Handle(id));
        self
    }

    /// Set the initial checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_position(mut self, position: CheckMarkPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_check_mark(mut self, width: i32, height: i32) -> Self {
        self.mark = Some(CheckMark { width, height });
        self
    }

    pub fn with_drawable_padding(mut self, gap: i32) -> Self {
        self.drawable_padding = gap;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> CheckMarkPosition {
        self.position
    }

    pub fn check_mark(&self) -> Option<CheckMark> {
        self.mark
    }

    /// Replace the padding the caller asked for.
    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    /// Padding as set by the caller, without room for the mark.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Padding around the text: the caller's padding, widened on the mark's
    /// side by the mark width plus the gap.
    pub fn content_padding(&self) -> Padding {
        let Some(mark) = self.mark else {
            return self.padding;
        };
        let extra = mark.width + self.drawable_padding;
        let mut padding = self.padding;
        match self.position {
            CheckMarkPosition::Left => padding.left += extra,
            CheckMarkPosition::Right => padding.right += extra,
        }
        padding
    }

    /// Smallest height that still fits the mark.
    pub fn min_height(&self) -> i32 {
        self.mark.map_or(0, |mark| mark.height)
    }

    /// Where the mark is drawn in an item of `width` x `height`.
    ///
    /// The mark hugs the caller's padding on its side. `None` without a mark.
    pub fn check_mark_bounds(&self, width: i32, height: i32, align: VerticalAlign) -> Option<Bounds> {
        let mark = self.mark?;
        let top = match align {
            VerticalAlign::Top => 0,
            VerticalAlign::Center => (height - mark.height) / 2,
            VerticalAlign::Bottom => height - mark.height,
        };
        let left = match self.position {
            CheckMarkPosition::Left => self.padding.left,
            CheckMarkPosition::Right => width - mark.width - self.padding.right,
        };
        Some(Bounds {
            left,
            top,
            right: left + mark.width,
            bottom: top + mark.height,
        })
    }
}

impl Selectable for CheckedText {
    fn handle(&self) -> Option<Handle> {
        self.handle
    }

    fn assign_handle(&mut self, handle: Handle) {
        self.handle = Some(handle);
    }

    fn is_checked(&self) -> bool {
        self.checked
    }

    fn set_checked(&mut self, checked: bool) -> bool {
        if self.checked == checked {
            return false;
        }
        self.checked = checked;
        true
    }

    fn toggle(&mut self) -> bool {
        self.set_checked(!self.checked)
    }
}
