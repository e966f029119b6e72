//! The capability a child needs to take part in exclusive selection.

use crate::handle::Handle;

/// An item that can be checked and unchecked by a group.
///
/// Hosts wrap any eligible child in this trait; the group never inspects
/// concrete child types.
pub trait Selectable {
    /// The item's handle, if one has been assigned.
    fn handle(&self) -> Option<Handle>;

    /// Give the item a handle. Called when it joins a group without one or
    /// with a handle another item already uses.
    fn assign_handle(&mut self, handle: Handle);

    /// Current checked state.
    fn is_checked(&self) -> bool;

    /// Set the checked state. Returns true if the state actually changed.
    fn set_checked(&mut self, checked: bool) -> bool;

    /// React to a tap. Radio-style items only ever turn on.
    ///
    /// Returns true if the state changed.
    fn toggle(&mut self) -> bool {
        self.set_checked(true)
    }
}

/// A plain radio button.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RadioButton {
    handle: Option<Handle>,
    label: String,
    checked: bool,
}

impl RadioButton {
    /// Create an unchecked button without a handle.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            handle: None,
            label: label.into(),
            checked: false,
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

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Selectable for RadioButton {
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
}
