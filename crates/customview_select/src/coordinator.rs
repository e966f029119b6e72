//! Exclusive-selection state machine.
//!
//! The coordinator keeps a record of which item is checked and tells the host
//! which items to check or uncheck. It never touches an item itself; every
//! visible change goes through [`SelectionHost::set_checked`].
//!
//! Hosts may call back into the coordinator from inside `set_checked` (an
//! item that changes state usually fires its own toggle notification). To
//! support that, all operations take `&self` and the state lives in `Cell`s.
//! Toggle notifications that arrive while the coordinator is issuing its own
//! instructions are dropped.

use std::cell::Cell;

use crate::handle::Handle;

/// The side of a selection group that owns the items.
pub trait SelectionHost {
    /// Set the checked state of the item identified by `handle`.
    ///
    /// Unknown handles must be ignored. The host may synchronously report the
    /// resulting state change through [`SelectionCoordinator::item_toggled`].
    fn set_checked(&mut self, coordinator: &SelectionCoordinator, handle: Handle, checked: bool);

    /// The recorded selection changed (or was re-asserted).
    fn selection_changed(&mut self, checked: Option<Handle>);
}

/// Tracks the single checked item of a group.
#[derive(Debug, Default)]
pub struct SelectionCoordinator {
    checked: Cell<Option<Handle>>,
    /// Single-threaded reentrancy lock, not a mutex.
    protect_from_toggle: Cell<bool>,
}

/// Restores the reentrancy flag when dropped.
struct ToggleGuard<'a> {
    flag: &'a Cell<bool>,
    previous: bool,
}

impl<'a> ToggleGuard<'a> {
    fn engage(flag: &'a Cell<bool>) -> Self {
        let previous = flag.replace(true);
        Self { flag, previous }
    }
}

impl Drop for ToggleGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

impl SelectionCoordinator {
    /// Create a coordinator with nothing checked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a coordinator with a preset selection.
    ///
    /// Nothing is sent to the host until [`finish_population`] is called.
    ///
    /// [`finish_population`]: Self::finish_population
    pub fn with_checked(handle: Handle) -> Self {
        Self {
            checked: Cell::new(Some(handle)),
            protect_from_toggle: Cell::new(false),
        }
    }

    /// The currently checked handle.
    pub fn checked(&self) -> Option<Handle> {
        self.checked.get()
    }

    /// Whether toggle notifications are currently being ignored.
    pub fn is_protected(&self) -> bool {
        self.protect_from_toggle.get()
    }

    /// An item joined the group.
    ///
    /// A pre-checked item takes over the selection; the previous one is
    /// unchecked on the host first.
    pub fn item_added<H>(&self, host: &mut H, handle: Handle, already_checked: bool)
    where
        H: SelectionHost + ?Sized,
    {
        log::trace!("item_added: {} (checked: {})", handle, already_checked);
        if !already_checked {
            return;
        }
        self.uncheck_previous(host, handle);
        self.record(host, Some(handle));
    }

    /// An item left the group.
    ///
    /// The recorded selection is kept even if it pointed at this item.
    pub fn item_removed(&self, handle: Handle) {
        if self.checked.get() == Some(handle) {
            log::debug!("item_removed: {} was checked, selection kept", handle);
        } else {
            log::trace!("item_removed: {}", handle);
        }
    }

    /// An item's checked state changed outside of [`check`](Self::check).
    pub fn item_toggled<H>(&self, host: &mut H, handle: Handle, now_checked: bool)
    where
        H: SelectionHost + ?Sized,
    {
        if self.protect_from_toggle.get() {
            log::trace!("item_toggled: {} ignored while protected", handle);
            return;
        }
        log::trace!("item_toggled: {} -> {}", handle, now_checked);
        if !now_checked {
            return;
        }
        self.uncheck_previous(host, handle);
        self.record(host, Some(handle));
    }

    /// Check `handle`, or clear the selection with `None`.
    ///
    /// Checking the already checked handle does nothing.
    pub fn check<H>(&self, host: &mut H, handle: Option<Handle>)
    where
        H: SelectionHost + ?Sized,
    {
        let current = self.checked.get();
        if handle == current {
            return;
        }
        log::debug!("check: {:?} -> {:?}", current, handle);
        {
            let _guard = ToggleGuard::engage(&self.protect_from_toggle);
            if let Some(previous) = current {
                host.set_checked(self, previous, false);
            }
            if let Some(next) = handle {
                host.set_checked(self, next, true);
            }
        }
        self.record(host, handle);
    }

    /// Clear the selection.
    pub fn clear<H>(&self, host: &mut H)
    where
        H: SelectionHost + ?Sized,
    {
        self.check(host, None);
    }

    /// Push a preset selection to the host once all items are present.
    pub fn finish_population<H>(&self, host: &mut H)
    where
        H: SelectionHost + ?Sized,
    {
        let Some(handle) = self.checked.get() else {
            return;
        };
        log::debug!("finish_population: re-asserting {}", handle);
        {
            let _guard = ToggleGuard::engage(&self.protect_from_toggle);
            host.set_checked(self, handle, true);
        }
        self.record(host, Some(handle));
    }

    fn uncheck_previous<H>(&self, host: &mut H, incoming: Handle)
    where
        H: SelectionHost + ?Sized,
    {
        let _guard = ToggleGuard::engage(&self.protect_from_toggle);
        if let Some(previous) = self.checked.get() {
            if previous != incoming {
                host.set_checked(self, previous, false);
            }
        }
    }

    fn record<H>(&self, host: &mut H, handle: Option<Handle>)
    where
        H: SelectionHost + ?Sized,
    {
        self.checked.set(handle);
        host.selection_changed(handle);
    }
}
