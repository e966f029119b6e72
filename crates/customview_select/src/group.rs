//! Radio group container
//!
//! A [`RadioGroup`] owns its children, finds the selectable items among them
//! through a [`ChildLayout`], and keeps at most one of them checked by
//! routing every state change through a [`SelectionCoordinator`].
//!
//! ```
//! use customview_select::{Handle, Node, RadioButton, RelativeRadioGroup};
//!
//! let mut group: RelativeRadioGroup = RelativeRadioGroup::new();
//! group.add_child(Node::Item(RadioButton::new("small").with_handle(1)));
//! group.add_child(Node::Item(RadioButton::new("large").with_handle(2)));
//!
//! group.check(Some(Handle(1)));
//! group.toggle(Handle(2));
//! assert_eq!(group.checked(), Some(Handle(2)));
//! assert!(!group.is_item_checked(Handle(1)));
//! ```

use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use crate::coordinator::{SelectionCoordinator, SelectionHost};
use crate::handle::{Handle, HandleAllocator};
use crate::layout::{ChildLayout, Relative, Table};
use crate::listener::Listeners;
use crate::selectable::Selectable;

/// Sent to checked-change listeners whenever the group records a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedChange {
    /// Name of the group that emitted the change
    pub group: String,
    /// The newly checked item, or `None` when the selection was cleared
    pub checked: Option<Handle>,
}

/// Sent to hierarchy listeners after the group's children change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HierarchyEvent {
    /// A child was appended at `index`; `handles` are the items it carries
    ChildAdded { index: usize, handles: Vec<Handle> },
    /// The child at `index` was removed
    ChildRemoved { index: usize, handles: Vec<Handle> },
}

/// A group whose items are its direct children.
pub type RelativeRadioGroup<T = crate::RadioButton> = RadioGroup<T, Relative>;

/// A group whose items are the cells of its rows.
pub type TableRadioGroup<T = crate::RadioButton> = RadioGroup<T, Table>;

/// Container keeping at most one of its items checked.
pub struct RadioGroup<T, L: ChildLayout<T>> {
    coordinator: SelectionCoordinator,
    allocator: HandleAllocator,
    tree: GroupTree<T, L>,
}

/// The host half of the group: children, tracking and listeners.
struct GroupTree<T, L: ChildLayout<T>> {
    name: String,
    children: Vec<L::Child>,
    /// Items whose own state changes are reported to the coordinator
    tracked: HashSet<Handle>,
    checked_listeners: Listeners<CheckedChange>,
    hierarchy_listeners: Listeners<HierarchyEvent>,
    _layout: PhantomData<fn() -> (T, L)>,
}

impl<T: Selectable, L: ChildLayout<T>> GroupTree<T, L> {
    fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.children.iter().flat_map(L::items)
    }

    fn find(&self, handle: Handle) -> Option<&T> {
        self.items().find(|item| item.handle() == Some(handle))
    }

    fn find_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.children
            .iter_mut()
            .flat_map(L::items_mut)
            .find(|item| item.handle() == Some(handle))
    }

    fn contains(&self, handle: Handle) -> bool {
        self.find(handle).is_some()
    }

    fn toggle(&mut self, coordinator: &SelectionCoordinator, handle: Handle) {
        let Some(item) = self.find_mut(handle) else {
            log::trace!("{}: no item {}, ignoring toggle", self.name, handle);
            return;
        };
        let changed = item.toggle();
        let checked = item.is_checked();
        if changed && self.tracked.contains(&handle) {
            coordinator.item_toggled(self, handle, checked);
        }
    }
}

impl<T: Selectable, L: ChildLayout<T>> SelectionHost for GroupTree<T, L> {
    fn set_checked(&mut self, coordinator: &SelectionCoordinator, handle: Handle, checked: bool) {
        let Some(item) = self.find_mut(handle) else {
            log::trace!("{}: no item {}, ignoring set_checked", self.name, handle);
            return;
        };
        let changed = item.set_checked(checked);
        if changed && self.tracked.contains(&handle) {
            coordinator.item_toggled(self, handle, checked);
        }
    }

    fn selection_changed(&mut self, checked: Option<Handle>) {
        log::debug!("{}: checked item is now {:?}", self.name, checked);
        let change = CheckedChange {
            group: self.name.clone(),
            checked,
        };
        self.checked_listeners.emit(&change);
    }
}

impl<T: Selectable, L: ChildLayout<T>> RadioGroup<T, L> {
    /// Create an empty group with nothing checked.
    pub fn new() -> Self {
        Self::with_coordinator(SelectionCoordinator::new())
    }

    /// Create an empty group with a preset selection.
    ///
    /// The preset is pushed to the items by [`finish_population`](Self::finish_population).
    pub fn with_initial_checked(handle: Handle) -> Self {
        Self::with_coordinator(SelectionCoordinator::with_checked(handle))
    }

    fn with_coordinator(coordinator: SelectionCoordinator) -> Self {
        Self {
            coordinator,
            allocator: HandleAllocator::new(),
            tree: GroupTree {
                name: L::NAME.to_string(),
                children: Vec::new(),
                tracked: HashSet::new(),
                checked_listeners: Listeners::new(),
                hierarchy_listeners: Listeners::new(),
                _layout: PhantomData,
            },
        }
    }

    /// Set the name reported in [`CheckedChange`] and log output.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.tree.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.tree.name
    }

    /// Subscribe to selection changes.
    pub fn on_checked_change<F>(&mut self, handler: F)
    where
        F: FnMut(&CheckedChange) + 'static,
    {
        self.tree.checked_listeners.subscribe(handler);
    }

    /// Subscribe to child additions and removals.
    pub fn on_hierarchy_change<F>(&mut self, handler: F)
    where
        F: FnMut(&HierarchyEvent) + 'static,
    {
        self.tree.hierarchy_listeners.subscribe(handler);
    }

    /// Append a child and return its index.
    ///
    /// Items without a handle, or with one already used by another item, get a
    /// fresh one. A pre-checked item takes over the selection. Items are
    /// tracked from here on, so their own state changes reach the coordinator.
    pub fn add_child(&mut self, mut child: L::Child) -> usize {
        let reserved: HashSet<Handle> = L::items(&child)
            .into_iter()
            .filter_map(Selectable::handle)
            .collect();
        let mut taken = HashSet::new();

        for item in L::items_mut(&mut child) {
            if let Some(handle) = item.handle() {
                if !taken.contains(&handle) && !self.tree.contains(handle) {
                    taken.insert(handle);
                    continue;
                }
                log::warn!("{}: handle {} already in use, reassigning", self.tree.name, handle);
            }
            let tree = &self.tree;
            let handle = self
                .allocator
                .allocate(|h| reserved.contains(&h) || taken.contains(&h) || tree.contains(h));
            taken.insert(handle);
            item.assign_handle(handle);
        }

        let items: Vec<(Handle, bool)> = L::items(&child)
            .into_iter()
            .filter_map(|item| item.handle().map(|h| (h, item.is_checked())))
            .collect();

        let index = self.tree.children.len();
        self.tree.children.push(child);
        log::debug!(
            "{}: child {} added with {} item(s)",
            self.tree.name,
            index,
            items.len()
        );

        for &(handle, checked) in &items {
            self.coordinator.item_added(&mut self.tree, handle, checked);
        }

        let handles: Vec<Handle> = items.into_iter().map(|(h, _)| h).collect();
        self.tree.tracked.extend(handles.iter().copied());
        self.tree
            .hierarchy_listeners
            .emit(&HierarchyEvent::ChildAdded { index, handles });
        index
    }

    /// Remove and return the child at `index`.
    ///
    /// The recorded selection is left alone even when the removed child held
    /// the checked item.
    pub fn remove_child(&mut self, index: usize) -> Option<L::Child> {
        if index >= self.tree.children.len() {
            return None;
        }
        let child = self.tree.children.remove(index);
        let handles: Vec<Handle> = L::items(&child)
            .into_iter()
            .filter_map(Selectable::handle)
            .collect();

        for handle in &handles {
            self.tree.tracked.remove(handle);
            self.coordinator.item_removed(*handle);
        }
        log::debug!("{}: child {} removed", self.tree.name, index);

        self.tree
            .hierarchy_listeners
            .emit(&HierarchyEvent::ChildRemoved { index, handles });
        Some(child)
    }

    /// Check `handle`, or clear the selection with `None`.
    pub fn check(&mut self, handle: Option<Handle>) {
        self.coordinator.check(&mut self.tree, handle);
    }

    /// Clear the selection.
    pub fn clear_check(&mut self) {
        self.coordinator.clear(&mut self.tree);
    }

    /// The checked item's handle.
    pub fn checked(&self) -> Option<Handle> {
        self.coordinator.checked()
    }

    /// Change an item's state directly, as user interaction would.
    ///
    /// The change is reported to the coordinator like any toggle coming from
    /// the item itself.
    pub fn set_item_checked(&mut self, handle: Handle, checked: bool) {
        SelectionHost::set_checked(&mut self.tree, &self.coordinator, handle, checked);
    }

    /// Tap an item, as [`Selectable::toggle`] defines it for that item.
    ///
    /// Radio items only ever turn on. A resulting change is reported to the
    /// coordinator like [`set_item_checked`](Self::set_item_checked).
    pub fn toggle(&mut self, handle: Handle) {
        self.tree.toggle(&self.coordinator, handle);
    }

    /// Push a preset selection to the items once they have all been added.
    pub fn finish_population(&mut self) {
        self.coordinator.finish_population(&mut self.tree);
    }

    /// Look up an item by handle.
    pub fn item(&self, handle: Handle) -> Option<&T> {
        self.tree.find(handle)
    }

    /// Whether the item with `handle` is currently checked on the item itself.
    pub fn is_item_checked(&self, handle: Handle) -> bool {
        self.item(handle).is_some_and(Selectable::is_checked)
    }

    /// All items in child order.
    pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.tree.items()
    }

    pub fn children(&self) -> &[L::Child] {
        &self.tree.children
    }

    pub fn len(&self) -> usize {
        self.tree.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.children.is_empty()
    }

    pub fn coordinator(&self) -> &SelectionCoordinator {
        &self.coordinator
    }
}

impl<T: Selectable, L: ChildLayout<T>> Default for RadioGroup<T, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, L: ChildLayout<T>> fmt::Debug for RadioGroup<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadioGroup")
            .field("name", &self.tree.name)
            .field("children", &self.tree.children.len())
            .field("checked", &self.coordinator.checked())
            .finish()
    }
}
