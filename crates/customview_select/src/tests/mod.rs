//! Multi-step scenarios for radio groups.
//!
//! These tests drive whole groups through add/toggle/check/remove sequences
//! and check what the items, the coordinator and the listeners end up with.

mod checked_text_group_tests;
mod relative_group_tests;

use std::cell::RefCell;
use std::rc::Rc;

use crate::{CheckedChange, ChildLayout, Handle, HierarchyEvent, RadioButton, RadioGroup};

/// Shared log of everything a group reported.
#[derive(Debug, Default)]
pub(crate) struct Recorded {
    pub changes: Vec<CheckedChange>,
    pub hierarchy: Vec<HierarchyEvent>,
}

impl Recorded {
    pub fn checked_sequence(&self) -> Vec<Option<Handle>> {
        self.changes.iter().map(|c| c.checked).collect()
    }
}

/// Subscribe a recorder to both listener lists of `group`.
pub(crate) fn record<L: ChildLayout<RadioButton>>(
    group: &mut RadioGroup<RadioButton, L>,
) -> Rc<RefCell<Recorded>> {
    let recorded = Rc::new(RefCell::new(Recorded::default()));

    let sink = Rc::clone(&recorded);
    group.on_checked_change(move |change| sink.borrow_mut().changes.push(change.clone()));
    let sink = Rc::clone(&recorded);
    group.on_hierarchy_change(move |event| sink.borrow_mut().hierarchy.push(event.clone()));

    recorded
}

/// Handles of items that are checked on the items themselves.
pub(crate) fn checked_items<L: ChildLayout<RadioButton>>(
    group: &RadioGroup<RadioButton, L>,
) -> Vec<Handle> {
    use crate::Selectable;
    group
        .items()
        .filter(|item| item.is_checked())
        .filter_map(|item| item.handle())
        .collect()
}

pub(crate) fn button(id: u32) -> RadioButton {
    RadioButton::new(format!("option {}", id)).with_handle(id)
}
